/// A pixel coordinate. `x` is the column, `y` the row; `y` grows downward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
