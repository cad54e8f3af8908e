//! # Board Layout
//!
//! Fixed layout of the 800x480 board, expressed as a table so each
//! field's position and scale can be checked on its own:
//!
//! ```text
//!  (50,40)   72°F                        scale 8
//!  (50,120)  H 75°F L 40°F CLEAR         scale 3
//!  (50,160)  ───────────────────────     700 px rule
//!  (50,190)  NORTH BUS: 2:20 PM          scale 3
//!  (50,225)  THEN: 2:50 PM               scale 2
//!  (50,295)  SOUTH BUS: --:--            scale 3
//!  (50,330)  THEN: --:--                 scale 2
//!  (50,430)  UPDATED 02:15 PM            scale 2
//! ```

use crate::bmp;
use crate::canvas::Canvas;
use crate::renderer::{draw_horizontal_line, draw_text};
use crate::DisplayData;

/// A piece of text derived from [`DisplayData`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Temperature,
    Summary,
    NorthNext,
    NorthAfter,
    SouthNext,
    SouthAfter,
    Updated,
}

impl Field {
    /// The string drawn for this field.
    pub fn text(self, data: &DisplayData) -> String {
        let weather = &data.weather;
        match self {
            Field::Temperature => weather.temperature.clone(),
            Field::Summary => format!(
                "H {} L {} {}",
                weather.high, weather.low, weather.condition
            ),
            Field::NorthNext => format!("NORTH BUS: {}", data.north_bus.next),
            Field::NorthAfter => format!("THEN: {}", data.north_bus.after),
            Field::SouthNext => format!("SOUTH BUS: {}", data.south_bus.next),
            Field::SouthAfter => format!("THEN: {}", data.south_bus.after),
            Field::Updated => format!("UPDATED {}", weather.time),
        }
    }
}

/// One drawing step. Coordinates are the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    Text {
        field: Field,
        x: i32,
        y: i32,
        scale: u32,
    },
    Rule {
        x: i32,
        y: i32,
        length: u32,
    },
}

/// Drawing order for the board.
pub const LAYOUT: [Element; 8] = [
    Element::Text { field: Field::Temperature, x: 50, y: 40, scale: 8 },
    Element::Text { field: Field::Summary, x: 50, y: 120, scale: 3 },
    Element::Rule { x: 50, y: 160, length: 700 },
    Element::Text { field: Field::NorthNext, x: 50, y: 190, scale: 3 },
    Element::Text { field: Field::NorthAfter, x: 50, y: 225, scale: 2 },
    Element::Text { field: Field::SouthNext, x: 50, y: 295, scale: 3 },
    Element::Text { field: Field::SouthAfter, x: 50, y: 330, scale: 2 },
    Element::Text { field: Field::Updated, x: 50, y: 430, scale: 2 },
];

/// Draw `data` onto a fresh board canvas.
pub fn compose_canvas(data: &DisplayData) -> Canvas {
    let mut canvas = Canvas::board();
    for element in LAYOUT {
        match element {
            Element::Text { field, x, y, scale } => {
                draw_text(&mut canvas, &field.text(data), x, y, scale);
            }
            Element::Rule { x, y, length } => {
                draw_horizontal_line(&mut canvas, x, y, length);
            }
        }
    }
    canvas
}

/// Render `data` to a complete BMP file.
pub fn compose(data: &DisplayData) -> Vec<u8> {
    bmp::encode(&compose_canvas(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BusPair, Weather};

    fn data() -> DisplayData {
        DisplayData {
            weather: Weather {
                temperature: "72°F".to_string(),
                low: "40°F".to_string(),
                high: "75°F".to_string(),
                condition: "Clear".to_string(),
                city: "Boulder, CO".to_string(),
                time: "02:15 PM".to_string(),
            },
            north_bus: BusPair {
                next: "2:20 PM".to_string(),
                after: "2:50 PM".to_string(),
            },
            south_bus: BusPair {
                next: "--:--".to_string(),
                after: "--:--".to_string(),
            },
        }
    }

    #[test]
    fn test_field_text() {
        let data = data();
        assert_eq!(Field::Temperature.text(&data), "72°F");
        assert_eq!(Field::Summary.text(&data), "H 75°F L 40°F Clear");
        assert_eq!(Field::NorthNext.text(&data), "NORTH BUS: 2:20 PM");
        assert_eq!(Field::NorthAfter.text(&data), "THEN: 2:50 PM");
        assert_eq!(Field::SouthNext.text(&data), "SOUTH BUS: --:--");
        assert_eq!(Field::SouthAfter.text(&data), "THEN: --:--");
        assert_eq!(Field::Updated.text(&data), "UPDATED 02:15 PM");
    }

    #[test]
    fn test_layout_order_and_positions() {
        let texts: Vec<_> = LAYOUT
            .iter()
            .filter_map(|e| match *e {
                Element::Text { field, x, y, scale } => Some((field, x, y, scale)),
                Element::Rule { .. } => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                (Field::Temperature, 50, 40, 8),
                (Field::Summary, 50, 120, 3),
                (Field::NorthNext, 50, 190, 3),
                (Field::NorthAfter, 50, 225, 2),
                (Field::SouthNext, 50, 295, 3),
                (Field::SouthAfter, 50, 330, 2),
                (Field::Updated, 50, 430, 2),
            ]
        );
        assert_eq!(LAYOUT[2], Element::Rule { x: 50, y: 160, length: 700 });
    }

    #[test]
    fn test_each_field_renders_in_its_slot() {
        let data = data();
        let canvas = compose_canvas(&data);

        for element in LAYOUT {
            let Element::Text { field, x, y, scale } = element else {
                continue;
            };
            let mut alone = Canvas::board();
            draw_text(&mut alone, &field.text(&data), x, y, scale);

            // Every pixel the field paints on its own is black on the board
            for py in y..y + 7 * scale as i32 {
                for px in x..800 {
                    if alone.is_black(px, py) == Some(true) {
                        assert_eq!(canvas.is_black(px, py), Some(true), "{field:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_rule_is_drawn() {
        let canvas = compose_canvas(&data());
        for x in 50..750 {
            assert_eq!(canvas.is_black(x, 160), Some(true));
        }
        assert_eq!(canvas.is_black(49, 160), Some(false));
        assert_eq!(canvas.is_black(750, 160), Some(false));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let data = data();
        assert_eq!(compose(&data), compose(&data));
    }

    #[test]
    fn test_long_strings_clip_without_panicking() {
        let mut data = data();
        data.weather.condition = "X".repeat(10_000);
        data.north_bus.next = "8".repeat(500);
        let bytes = compose(&data);
        assert_eq!(bytes.len(), 48_062);
    }
}
