use crate::{Hexagon, HexagonalGrid};
use svg::{
    node::{
        element::{Group, Polygon, Text},
        Comment,
    },
    Document,
};

/// Fill for cells with no data attached
const EMPTY_FILL: &str = "#ffffff";
/// Fill for cells with data, when no fill function is given
const DATA_FILL: &str = "#4a90d9";
const STROKE: &str = "#333333";

/// Render a grid as an SVG. Each cell is drawn as a hexagon outline, labeled
/// with its coordinate. Cells with data attached are filled in.
pub fn grid_to_svg<T>(grid: &HexagonalGrid<T>) -> Document {
    grid_to_svg_with(grid, |_| DATA_FILL.to_owned())
}

/// Render a grid as an SVG, using `fill` to pick the fill color (any SVG
/// color value, e.g. `#ff0000`) of each cell that has data attached. Cells
/// without data are always white.
pub fn grid_to_svg_with<T>(
    grid: &HexagonalGrid<T>,
    fill: impl Fn(&T) -> String,
) -> Document {
    // Pad the view box by a bit so the outer strokes don't get clipped
    let (min, max) = grid.pixel_bounds();
    let padding = 1.0;
    let mut document = Document::new()
        .set(
            "viewBox",
            (
                // Top-left corner
                (min.x - padding).floor(),
                (min.y - padding).floor(),
                // Width and height
                (max.x - min.x + padding * 2.0).ceil(),
                (max.y - min.y + padding * 2.0).ceil(),
            ),
        )
        .add(Comment::new(format!("\n{:#?}\n", grid.grid_data())));

    for hexagon in grid.hexagons() {
        document = document.add(draw_hexagon(grid, &hexagon, &fill));
    }

    document
}

/// Generate an SVG group for a single cell
fn draw_hexagon<T>(
    grid: &HexagonalGrid<T>,
    hexagon: &Hexagon<'_, T>,
    fill: &impl Fn(&T) -> String,
) -> Group {
    let fill = match hexagon.data() {
        Ok(data) => fill(data),
        Err(_) => EMPTY_FILL.to_owned(),
    };
    let center = hexagon.center();
    // Scale the label with the cell so it always fits
    let font_size = grid.grid_data().radius() / 3.0;

    Group::new()
        .add(Comment::new(hexagon.coordinate().to_string())) // Readability!
        .add(
            Polygon::new()
                .set(
                    "points",
                    hexagon
                        .points()
                        .iter()
                        .map(|point| (point.x, point.y))
                        .collect::<Vec<_>>(),
                )
                .set("fill", fill)
                .set("stroke", STROKE)
                .set("stroke-width", 0.5),
        )
        .add(
            Text::new(hexagon.id())
                .set("x", center.x)
                .set("y", center.y)
                .set("font-size", font_size)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle"),
        )
}
