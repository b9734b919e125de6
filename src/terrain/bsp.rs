// src/terrain/bsp.rs
//! Комнаты и коридоры через двоичное разбиение пространства (BSP)
//!
//! 1. Прямоугольник карты делится вдоль одной из осей; вероятность горизонтального
//!    разреза равна `h / (w + h)`, т.е. вытянутые области режутся поперёк.
//!    Деление прекращается, когда обе стороны листа не больше `max_leaf_size`
//!    или лист уже нельзя разрезать без нарушения `min_leaf_size`.
//! 2. В каждом листе — одна комната со случайными отступами (минимум 1 клетка стены).
//! 3. Для каждого внутреннего узла ближайшие комнаты двух поддеревьев соединяются
//!    Г-образным коридором. Из двух вариантов угла выбирается тот, что пересекает
//!    меньше чужих комнат; при равенстве решает бросок.
//!
//! Дерево хранится плоским массивом узлов с индексами детей (арена), обход идёт по индексам.
//! Порядок деления и размещения задаётся только потоком ГСЧ.

use rand::Rng;

use super::{Room, Tile};
use crate::config::TerrainSettings;
use crate::naming::unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Debug, Clone)]
struct BspNode {
    rect: Rect,
    children: Option<(usize, usize)>,
    room: Option<usize>,
}

impl BspNode {
    fn leaf(rect: Rect) -> Self {
        Self {
            rect,
            children: None,
            room: None,
        }
    }
}

/// Генерирует сетку клеток и список комнат
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    width: u32,
    height: u32,
    settings: &TerrainSettings,
) -> (Vec<Tile>, Vec<Room>) {
    let root = Rect {
        x: 0,
        y: 0,
        w: width,
        h: height,
    };
    let mut nodes = partition(rng, root, settings);
    let mut tiles = vec![Tile::Wall; (width * height) as usize];
    let mut rooms = Vec::new();

    // ШАГ 1: по комнате в каждый лист
    for node in &mut nodes {
        if node.children.is_none() {
            let room = place_room(rng, node.rect, settings);
            carve_room(&mut tiles, width, &room);
            node.room = Some(rooms.len());
            rooms.push(room);
        }
    }

    // ШАГ 2: коридоры снизу вверх, начиная с самых глубоких узлов
    for idx in (0..nodes.len()).rev() {
        if let Some((left, right)) = nodes[idx].children {
            let left_rooms = rooms_in(&nodes, left);
            let right_rooms = rooms_in(&nodes, right);
            if let Some((a, b)) = closest_pair(&rooms, &left_rooms, &right_rooms) {
                connect(rng, &mut tiles, width, &rooms, a, b);
            }
        }
    }

    (tiles, rooms)
}

fn partition<R: Rng + ?Sized>(rng: &mut R, root: Rect, settings: &TerrainSettings) -> Vec<BspNode> {
    let mut nodes = vec![BspNode::leaf(root)];
    let mut next = 0;
    while next < nodes.len() {
        if let Some((a, b)) = split(rng, nodes[next].rect, settings) {
            let first = nodes.len();
            nodes.push(BspNode::leaf(a));
            nodes.push(BspNode::leaf(b));
            nodes[next].children = Some((first, first + 1));
        }
        next += 1;
    }
    nodes
}

fn split<R: Rng + ?Sized>(
    rng: &mut R,
    rect: Rect,
    settings: &TerrainSettings,
) -> Option<(Rect, Rect)> {
    if rect.w <= settings.max_leaf_size && rect.h <= settings.max_leaf_size {
        return None;
    }

    let min = settings.min_leaf_size.max(1);
    let can_cut_across_height = rect.h >= 2 * min;
    let can_cut_across_width = rect.w >= 2 * min;

    let draw = unit(rng);
    let horizontal = match (can_cut_across_height, can_cut_across_width) {
        (true, true) => draw < f64::from(rect.h) / f64::from(rect.w + rect.h),
        (true, false) => true,
        (false, true) => false,
        (false, false) => return None,
    };

    if horizontal {
        let at = rng.gen_range(min..=rect.h - min);
        Some((
            Rect { h: at, ..rect },
            Rect {
                y: rect.y + at,
                h: rect.h - at,
                ..rect
            },
        ))
    } else {
        let at = rng.gen_range(min..=rect.w - min);
        Some((
            Rect { w: at, ..rect },
            Rect {
                x: rect.x + at,
                w: rect.w - at,
                ..rect
            },
        ))
    }
}

fn place_room<R: Rng + ?Sized>(rng: &mut R, leaf: Rect, settings: &TerrainSettings) -> Room {
    // Отступ в одну клетку с каждой стороны: комнаты соседних листов не сливаются
    let avail_w = leaf.w.saturating_sub(2).max(1);
    let avail_h = leaf.h.saturating_sub(2).max(1);
    let width = rng.gen_range(settings.min_room_size.clamp(1, avail_w)..=avail_w);
    let height = rng.gen_range(settings.min_room_size.clamp(1, avail_h)..=avail_h);
    let x = leaf.x + 1 + rng.gen_range(0..=avail_w - width);
    let y = leaf.y + 1 + rng.gen_range(0..=avail_h - height);
    Room {
        x,
        y,
        width,
        height,
    }
}

fn carve_room(tiles: &mut [Tile], map_width: u32, room: &Room) {
    for y in room.y..room.y + room.height {
        for x in room.x..room.x + room.width {
            tiles[(y * map_width + x) as usize] = Tile::Floor;
        }
    }
}

fn rooms_in(nodes: &[BspNode], root: usize) -> Vec<usize> {
    let mut result = Vec::new();
    let mut stack = vec![root];
    while let Some(idx) = stack.pop() {
        match nodes[idx].children {
            Some((left, right)) => {
                stack.push(right);
                stack.push(left);
            }
            None => result.extend(nodes[idx].room),
        }
    }
    result
}

/// Пара комнат из разных поддеревьев с минимальным манхэттенским расстоянием между центрами
fn closest_pair(rooms: &[Room], left: &[usize], right: &[usize]) -> Option<(usize, usize)> {
    let mut best: Option<(u32, usize, usize)> = None;
    for &a in left {
        for &b in right {
            let (ax, ay) = rooms[a].center();
            let (bx, by) = rooms[b].center();
            let distance = ax.abs_diff(bx) + ay.abs_diff(by);
            if best.is_none_or(|(d, _, _)| distance < d) {
                best = Some((distance, a, b));
            }
        }
    }
    best.map(|(_, a, b)| (a, b))
}

fn connect<R: Rng + ?Sized>(
    rng: &mut R,
    tiles: &mut [Tile],
    map_width: u32,
    rooms: &[Room],
    a: usize,
    b: usize,
) {
    let start = rooms[a].center();
    let end = rooms[b].center();
    let horizontal_first = l_path(start, (end.0, start.1), end);
    let vertical_first = l_path(start, (start.0, end.1), end);

    let coin = rng.gen_bool(0.5);
    let cost_h = foreign_overlap(&horizontal_first, rooms, a, b);
    let cost_v = foreign_overlap(&vertical_first, rooms, a, b);
    let path = if cost_h < cost_v || (cost_h == cost_v && coin) {
        horizontal_first
    } else {
        vertical_first
    };

    carve_path(tiles, map_width, &path);
}

/// Две прямые: `from → corner → to`, угол не дублируется
fn l_path(from: (u32, u32), corner: (u32, u32), to: (u32, u32)) -> Vec<(u32, u32)> {
    let mut path = straight(from, corner);
    let tail = straight(corner, to);
    path.extend(tail.into_iter().skip(1));
    path
}

fn straight(from: (u32, u32), to: (u32, u32)) -> Vec<(u32, u32)> {
    let (mut x, mut y) = from;
    let mut points = vec![(x, y)];
    while (x, y) != to {
        if x != to.0 {
            x = if to.0 > x { x + 1 } else { x - 1 };
        } else {
            y = if to.1 > y { y + 1 } else { y - 1 };
        }
        points.push((x, y));
    }
    points
}

fn foreign_overlap(path: &[(u32, u32)], rooms: &[Room], a: usize, b: usize) -> usize {
    path.iter()
        .filter(|&&(x, y)| {
            rooms
                .iter()
                .enumerate()
                .any(|(i, room)| i != a && i != b && room.contains(x, y))
        })
        .count()
}

/// Прорубает коридор; клетки на выходе из комнаты и на входе в неё становятся дверями
fn carve_path(tiles: &mut [Tile], map_width: u32, path: &[(u32, u32)]) {
    let mut prev: Option<usize> = None;
    for &(x, y) in path {
        let idx = (y * map_width + x) as usize;
        match tiles[idx] {
            Tile::Wall => {
                let leaving_room = prev.is_some_and(|p| tiles[p] == Tile::Floor);
                tiles[idx] = if leaving_room {
                    Tile::Door
                } else {
                    Tile::Corridor
                };
            }
            Tile::Floor => {
                if let Some(p) = prev {
                    if tiles[p] == Tile::Corridor {
                        tiles[p] = Tile::Door;
                    }
                }
            }
            Tile::Corridor | Tile::Door => {}
        }
        prev = Some(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::rng_for;

    fn map(seed: i64, width: u32, height: u32) -> (Vec<Tile>, Vec<Room>) {
        generate(&mut rng_for(seed), width, height, &TerrainSettings::default())
    }

    #[test]
    fn rooms_stay_inside_the_walls() {
        for seed in 0..30 {
            let (_, rooms) = map(seed, 80, 50);
            for room in &rooms {
                assert!(room.x >= 1 && room.y >= 1);
                assert!(room.x + room.width <= 79);
                assert!(room.y + room.height <= 49);
                assert!(room.width >= 3 && room.height >= 3);
            }
        }
    }

    #[test]
    fn rooms_never_overlap() {
        let (_, rooms) = map(42, 80, 50);
        assert!(rooms.len() >= 4);
        for (i, a) in rooms.iter().enumerate() {
            for b in &rooms[i + 1..] {
                let apart = a.x + a.width <= b.x
                    || b.x + b.width <= a.x
                    || a.y + a.height <= b.y
                    || b.y + b.height <= a.y;
                assert!(apart, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn room_tiles_are_floor_and_doors_touch_rooms() {
        let (tiles, rooms) = map(9, 60, 40);
        for room in &rooms {
            for y in room.y..room.y + room.height {
                for x in room.x..room.x + room.width {
                    assert_eq!(tiles[(y * 60 + x) as usize], Tile::Floor);
                }
            }
        }
        for (idx, tile) in tiles.iter().enumerate() {
            if *tile == Tile::Door {
                let (x, y) = ((idx % 60) as i32, (idx / 60) as i32);
                let touches_floor = [(0, 1), (1, 0), (0, -1), (-1, 0)].iter().any(|(dx, dy)| {
                    let (nx, ny) = (x + dx, y + dy);
                    tiles[(ny * 60 + nx) as usize] == Tile::Floor
                });
                assert!(touches_floor, "door at ({x}, {y})");
            }
        }
    }

    #[test]
    fn small_map_is_a_single_room() {
        let (tiles, rooms) = map(1, 10, 10);
        assert_eq!(rooms.len(), 1);
        assert!(!tiles.contains(&Tile::Corridor));
    }

    #[test]
    fn leaves_respect_the_size_band() {
        let settings = TerrainSettings::default();
        let nodes = partition(
            &mut rng_for(77),
            Rect {
                x: 0,
                y: 0,
                w: 120,
                h: 70,
            },
            &settings,
        );
        for node in nodes.iter().filter(|n| n.children.is_none()) {
            assert!(node.rect.w >= settings.min_leaf_size);
            assert!(node.rect.h >= settings.min_leaf_size);
            assert!(node.rect.w <= settings.max_leaf_size && node.rect.h <= settings.max_leaf_size);
        }
    }

    #[test]
    fn l_path_is_contiguous() {
        let path = l_path((2, 3), (7, 3), (7, 9));
        assert_eq!(path.first(), Some(&(2, 3)));
        assert_eq!(path.last(), Some(&(7, 9)));
        assert_eq!(path.len(), 5 + 6 + 1);
        for pair in path.windows(2) {
            let step = pair[0].0.abs_diff(pair[1].0) + pair[0].1.abs_diff(pair[1].1);
            assert_eq!(step, 1);
        }
    }
}
