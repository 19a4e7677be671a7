use grid_2d::Coord;

/// Walks parent links backwards from `goal` and writes the coordinates into
/// `path` in start-to-goal order. `parent` returns `None` at the start node.
pub(crate) fn reconstruct<T, P, C>(goal: T, mut parent: P, mut coord_of: C, path: &mut Vec<Coord>)
where
    T: Copy,
    P: FnMut(T) -> Option<T>,
    C: FnMut(T) -> Coord,
{
    path.clear();
    let mut current = goal;
    loop {
        path.push(coord_of(current));
        match parent(current) {
            Some(next) => current = next,
            None => break,
        }
    }
    path.reverse();
}
