use clap::{Parser, Subcommand};
use procgen::params::keys;
use procgen::seed::tags;
use procgen::{Engine, EngineConfig, GenerationParams, Generator, GenreRegistry, derive_seed};
use serde::Serialize;
use std::path::PathBuf;

/// Детерминированный генератор игрового контента
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Мастер-сид
    #[arg(short, long, default_value_t = 0, global = true, allow_negative_numbers = true)]
    seed: i64,

    /// Идентификатор жанра
    #[arg(short, long, default_value = "fantasy", global = true)]
    genre: String,

    /// Глубина (прогресс по миру)
    #[arg(short, long, default_value_t = 0, global = true, allow_negative_numbers = true)]
    depth: i64,

    /// Сложность, номинально 0..1
    #[arg(long, default_value_t = 0.5, global = true)]
    difficulty: f64,

    /// Путь к конфигурационному файлу в формате TOML
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Индекс под-сида внутри домена
    #[arg(short, long, default_value_t = 0, global = true)]
    index: u64,

    /// Сколько элементов сгенерировать
    #[arg(short = 'n', long, global = true)]
    count: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Карта подземелья
    Terrain {
        /// bsp или cellular
        #[arg(long, default_value = "bsp")]
        algorithm: String,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        /// Сохранить превью в PNG вместо вывода JSON
        #[arg(long)]
        png: Option<PathBuf>,
        /// Пикселей на клетку в превью
        #[arg(long, default_value_t = 4)]
        scale: u32,
    },
    /// Существа
    Entities {
        /// monster, boss, minion или npc
        #[arg(long = "type")]
        entity_type: Option<String>,
    },
    /// Предметы
    Items {
        /// weapon, armor, consumable или accessory
        #[arg(long)]
        category: Option<String>,
    },
    /// Заклинания
    Spells {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        element: Option<String>,
    },
    /// Деревья навыков
    Skills {
        #[arg(long)]
        archetype: Option<String>,
    },
    /// Список зарегистрированных жанров
    Genres,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn generate_and_print<G>(
    generator: &G,
    seed: i64,
    params: &GenerationParams,
) -> Result<(), Box<dyn std::error::Error>>
where
    G: Generator,
    G::Output: Serialize,
{
    let output = generator.generate_validated(seed, params)?;
    print_json(&output)
}

fn with_optional(params: GenerationParams, key: &str, value: Option<String>) -> GenerationParams {
    match value {
        Some(value) => params.with_custom(key, value),
        None => params,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            log::info!("Загрузка конфигурации из {}", path.display());
            EngineConfig::from_toml_file(path)?
        }
        None => EngineConfig::default(),
    };
    let engine = Engine::new(config, GenreRegistry::with_defaults())?;

    let mut params = GenerationParams::new(cli.depth, cli.difficulty, cli.genre.clone());
    if let Some(count) = cli.count {
        params = params.with_custom(keys::COUNT, count);
    }

    match cli.command {
        Command::Terrain {
            algorithm,
            width,
            height,
            png,
            scale,
        } => {
            let seed = derive_seed(cli.seed, tags::TERRAIN, cli.index);
            let mut params = params.with_custom(keys::ALGORITHM, algorithm);
            if let Some(width) = width {
                params = params.with_custom(keys::WIDTH, width);
            }
            if let Some(height) = height {
                params = params.with_custom(keys::HEIGHT, height);
            }

            let terrain = engine.terrain.generate_validated(seed, &params)?;
            match png {
                Some(path) => {
                    let palette = engine.registry().get(&params.genre_id)?.palette;
                    let path_str = path.to_str().ok_or("PNG path must be valid UTF-8")?;
                    terrain.save_as_png(path_str, &palette, scale)?;
                    log::info!(
                        "Карта {} ({}×{}) сохранена в {}",
                        terrain.name,
                        terrain.width,
                        terrain.height,
                        path.display()
                    );
                }
                None => print_json(&terrain)?,
            }
        }
        Command::Entities { entity_type } => {
            let seed = derive_seed(cli.seed, tags::ENTITY, cli.index);
            let params = with_optional(params, keys::TYPE, entity_type);
            generate_and_print(&engine.entities, seed, &params)?;
        }
        Command::Items { category } => {
            let seed = derive_seed(cli.seed, tags::ITEM, cli.index);
            let params = with_optional(params, keys::CATEGORY, category);
            generate_and_print(&engine.items, seed, &params)?;
        }
        Command::Spells { category, element } => {
            let seed = derive_seed(cli.seed, tags::SPELL, cli.index);
            let params = with_optional(params, keys::CATEGORY, category);
            let params = with_optional(params, keys::ELEMENT, element);
            generate_and_print(&engine.spells, seed, &params)?;
        }
        Command::Skills { archetype } => {
            let seed = derive_seed(cli.seed, tags::SKILL_TREE, cli.index);
            let params = with_optional(params, keys::ARCHETYPE, archetype);
            generate_and_print(&engine.skill_trees, seed, &params)?;
        }
        Command::Genres => print_json(&engine.registry().all())?,
    }

    Ok(())
}
