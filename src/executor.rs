//! Command validation and dispatch onto a canvas
//!
//! Every argument is validated before the canvas is touched, so a failed
//! command never leaves a partially applied change behind.

use crate::canvas::{Canvas, Shape, MAX_DIMENSION};
use crate::command::{Command, Keyword};
use crate::errors::{CanvasError, Result};

/// Status code returned for a successfully applied command
pub const SUCCESS: i32 = 0;

/// Applies commands to a canvas
pub trait CommandExecutor {
    /// Validate `command` and apply it to `canvas`, returning a status code
    fn execute(&self, canvas: &mut dyn Canvas, command: &Command) -> Result<i32>;
}

/// Synchronous executor: one command is validated and applied at a time
#[derive(Debug, Default, Clone, Copy)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for SyncExecutor {
    fn execute(&self, canvas: &mut dyn Canvas, command: &Command) -> Result<i32> {
        let keyword = command.keyword();
        tracing::debug!(%keyword, args = ?command.args(), "dispatching command");

        match keyword {
            Keyword::Quit => return Ok(SUCCESS),
            Keyword::Unknown => return Err(CanvasError::UnknownCommand),
            Keyword::Create => {}
            _ if !canvas.created() => return Err(CanvasError::NotCreated),
            _ => {}
        }

        let args = required_args(command)?;
        if matches!(keyword, Keyword::Create | Keyword::Line | Keyword::Rect) {
            // Trailing arguments must be integers too, even though they are unused
            for extra in &command.args()[args.len()..] {
                parse_int(extra)?;
            }
        }

        match keyword {
            Keyword::Create => {
                let width = parse_dimension("width", &args[0])?;
                let height = parse_dimension("height", &args[1])?;
                canvas.create(width, height);
                tracing::info!(width, height, "canvas created");
            }
            Keyword::Line | Keyword::Rect => {
                let [x1, y1, x2, y2] = parse_coords(&args[..4])?;
                let shape = if keyword == Keyword::Line {
                    Shape::line(x1, y1, x2, y2)
                } else {
                    Shape::rect(x1, y1, x2, y2)
                };
                canvas.draw(&shape)?;
            }
            Keyword::Fill => {
                let x = parse_int(&args[0])?;
                let y = parse_int(&args[1])?;
                let color = parse_color(&args[2])?;
                canvas.fill(x, y, color);
            }
            Keyword::Quit | Keyword::Unknown => {}
        }

        Ok(SUCCESS)
    }
}

/// Check arity and return the arguments the keyword consumes
fn required_args(command: &Command) -> Result<&[String]> {
    let expected = command.keyword().min_args();
    let args = command.args();
    if args.len() < expected {
        return Err(CanvasError::Arity {
            keyword: command.keyword(),
            expected,
            actual: args.len(),
        });
    }
    Ok(&args[..expected])
}

fn parse_int(arg: &str) -> Result<i64> {
    arg.parse::<i64>()
        .map_err(|_| CanvasError::Type(format!("'{arg}' is not an integer")))
}

fn parse_coords(args: &[String]) -> Result<[i64; 4]> {
    Ok([
        parse_int(&args[0])?,
        parse_int(&args[1])?,
        parse_int(&args[2])?,
        parse_int(&args[3])?,
    ])
}

fn parse_dimension(name: &str, arg: &str) -> Result<i64> {
    let value = parse_int(arg)?;
    if !(1..=MAX_DIMENSION).contains(&value) {
        return Err(CanvasError::Type(format!(
            "canvas {name} must be between 1 and {MAX_DIMENSION}, got {value}"
        )));
    }
    Ok(value)
}

fn parse_color(arg: &str) -> Result<u8> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        (Some(_), None) => Err(CanvasError::Type(format!(
            "color symbol '{arg}' must be an ASCII character"
        ))),
        _ => Err(CanvasError::Type(
            "Color symbol must be a single character".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::canvas::{Grid, BLANK, STROKE};

    fn run(grid: &mut Grid, line: &str) -> Result<i32> {
        SyncExecutor::new().execute(grid, &Command::parse(line))
    }

    fn created(width: i64, height: i64) -> Grid {
        Grid::with_size(width, height)
    }

    #[test]
    fn test_create() {
        let mut grid = Grid::new();
        assert_eq!(run(&mut grid, "C 20 4").unwrap(), SUCCESS);
        assert_eq!((grid.width(), grid.height()), (20, 4));
    }

    #[test]
    fn test_create_accepts_extra_integer_args() {
        let mut grid = Grid::new();
        run(&mut grid, "C 3 2 7").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
    }

    #[rstest]
    #[case("C 3 2 junk")]
    #[case("L 1 1 3 1 x")]
    #[case("R 1 1 3 3 4 y")]
    fn test_non_integer_extra_args_rejected(#[case] line: &str) {
        let mut grid = created(4, 4);
        let before = grid.clone();
        assert!(matches!(run(&mut grid, line), Err(CanvasError::Type(_))));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_fill_ignores_extra_args() {
        let mut grid = created(2, 1);
        run(&mut grid, "B 1 1 o extra").unwrap();
        assert_eq!(grid.rows().next(), Some(&b"oo"[..]));
    }

    #[test]
    fn test_create_with_one_arg_is_arity_error() {
        let mut grid = Grid::new();
        let err = run(&mut grid, "C 20").unwrap_err();
        assert!(matches!(
            err,
            CanvasError::Arity {
                keyword: Keyword::Create,
                expected: 2,
                actual: 1
            }
        ));
        assert!(!grid.created());
    }

    #[rstest]
    #[case("C abc 4")]
    #[case("C 4 abc")]
    #[case("C 4.5 3")]
    #[case("C 0 3")]
    #[case("C 3 -1")]
    #[case("C 9223372036854775807 2")]
    #[case("C 2 10001")]
    fn test_create_rejects_bad_dimensions(#[case] line: &str) {
        let mut grid = Grid::new();
        assert!(matches!(run(&mut grid, line), Err(CanvasError::Type(_))));
        assert!(!grid.created());
    }

    #[test]
    fn test_failed_recreate_keeps_existing_canvas() {
        let mut grid = created(4, 2);
        run(&mut grid, "L 1 1 4 1").unwrap();
        let before = grid.clone();
        assert!(run(&mut grid, "C 9 x").is_err());
        assert_eq!(grid, before);
    }

    #[rstest]
    #[case("L 1 2 6 2")]
    #[case("R 1 1 3 3")]
    #[case("B 1 1 o")]
    fn test_drawing_requires_created_canvas(#[case] line: &str) {
        let mut grid = Grid::new();
        assert!(matches!(run(&mut grid, line), Err(CanvasError::NotCreated)));
    }

    #[test]
    fn test_not_created_is_checked_before_arity() {
        let mut grid = Grid::new();
        assert!(matches!(run(&mut grid, "L"), Err(CanvasError::NotCreated)));
    }

    #[rstest]
    #[case("L 1 2 6", 4, 3)]
    #[case("R 1 1", 4, 2)]
    #[case("B 1 1", 3, 2)]
    fn test_arity_errors(#[case] line: &str, #[case] expected: usize, #[case] actual: usize) {
        let mut grid = created(5, 5);
        match run(&mut grid, line) {
            Err(CanvasError::Arity {
                expected: e,
                actual: a,
                ..
            }) => assert_eq!((e, a), (expected, actual)),
            other => panic!("expected arity error, got {other:?}"),
        }
    }

    #[rstest]
    #[case("L 1 2 six 2")]
    #[case("R 1 1 3 3.0")]
    #[case("B x 1 o")]
    #[case("B 1 1 oo")]
    #[case("B 1 1 é")]
    fn test_type_errors_leave_grid_untouched(#[case] line: &str) {
        let mut grid = created(5, 5);
        let before = grid.clone();
        assert!(matches!(run(&mut grid, line), Err(CanvasError::Type(_))));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_line_dispatch() {
        let mut grid = created(8, 4);
        assert_eq!(run(&mut grid, "L 2 2 6 2").unwrap(), SUCCESS);
        assert_eq!(grid.rows().nth(1), Some(&b" xxxxx  "[..]));
    }

    #[test]
    fn test_line_with_extreme_coordinate_is_clipped() {
        let mut grid = created(5, 3);
        run(&mut grid, "L -9223372036854775808 1 3 1").unwrap();
        assert_eq!(grid.rows().next(), Some(&b"xxx  "[..]));
    }

    #[test]
    fn test_create_at_size_limit() {
        let mut grid = Grid::new();
        run(&mut grid, "C 10000 1").unwrap();
        assert_eq!(grid.width(), 10_000);
    }

    #[test]
    fn test_diagonal_line_is_invalid_shape() {
        let mut grid = created(8, 4);
        assert!(matches!(
            run(&mut grid, "L 1 1 3 3"),
            Err(CanvasError::InvalidShape(_))
        ));
        assert!(grid.rows().flatten().all(|&c| c == BLANK));
    }

    #[test]
    fn test_rect_dispatch() {
        let mut grid = created(8, 5);
        run(&mut grid, "R 2 2 6 4").unwrap();
        assert_eq!(grid.get(1, 1), STROKE);
        assert_eq!(grid.get(2, 2), BLANK);
        assert_eq!(grid.get(3, 5), STROKE);
    }

    #[test]
    fn test_inverted_rect_is_invalid_shape() {
        let mut grid = created(8, 5);
        assert!(matches!(
            run(&mut grid, "R 6 4 2 2"),
            Err(CanvasError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_fill_dispatch() {
        let mut grid = created(10, 8);
        run(&mut grid, "B 5 2 o").unwrap();
        assert!(grid.rows().flatten().all(|&c| c == b'o'));
        assert_eq!(run(&mut grid, "B -1 2 +").unwrap(), SUCCESS);
        assert!(grid.rows().flatten().all(|&c| c == b'o'));
    }

    #[test]
    fn test_quit_is_noop_even_without_canvas() {
        let mut grid = Grid::new();
        assert_eq!(run(&mut grid, "Q").unwrap(), SUCCESS);
        assert!(!grid.created());
    }

    #[test]
    fn test_unknown_command() {
        let mut grid = created(2, 2);
        assert!(matches!(
            run(&mut grid, "Z 1 2"),
            Err(CanvasError::UnknownCommand)
        ));
    }
}
