//! Plain-text dumps of cube state.

use liquiprism_space::Cube;

/// Render every face of `cube`, each under a `face N:` header.
///
/// Faces appear in ascending order, each followed by its grid as
/// space-separated `0`/`1` rows (see `Grid`'s `Display`).
pub fn render_cube(cube: &Cube) -> String {
    let mut out = String::new();
    for (id, face) in cube.iter() {
        out.push_str(&format!("face {id}:\n"));
        out.push_str(&face.grid().to_string());
    }
    out
}
