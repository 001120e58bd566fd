//! Small reference patterns, as rows of `0`/`1`.

/// Horizontal row of three in the second row of a 5x5 face.
pub const ROW_OF_THREE_5X5: [[u8; 5]; 5] = [
    [0, 0, 0, 0, 0],
    [0, 1, 1, 1, 0],
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
];

/// Expected successor of [`ROW_OF_THREE_5X5`] under Conway's rule.
pub const COLUMN_OF_THREE_5X5: [[u8; 5]; 5] = [
    [0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0],
];

/// A cell surrounded by four alive orthogonal neighbours in a 5x5 face.
pub const PLUS_5X5: [[u8; 5]; 5] = [
    [0, 0, 0, 0, 0],
    [0, 0, 1, 0, 0],
    [0, 1, 0, 1, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 0, 0, 0],
];
