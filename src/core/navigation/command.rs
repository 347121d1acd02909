use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Keyboard zooms are coarse, mouse-wheel zooms fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomStep {
    Coarse,
    Fine,
}

/// One discrete instruction from an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pan(PanDirection),
    ZoomIn(ZoomStep),
    ZoomOut(ZoomStep),
    /// Moves the view centre to the plane point under this pixel.
    Recenter(Point),
    Reset,
    IncreaseIterations,
    DecreaseIterations,
    Terminate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    UnknownCommand { token: String },
    InvalidPoint { token: String },
}

impl fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { token } => write!(f, "unknown command '{}'", token),
            Self::InvalidPoint { token } => {
                write!(f, "expected center:<col>,<row>, got '{}'", token)
            }
        }
    }
}

impl Error for CommandParseError {}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();

        if let Some(coords) = token.strip_prefix("center:") {
            return parse_point(coords)
                .map(Command::Recenter)
                .ok_or_else(|| CommandParseError::InvalidPoint {
                    token: token.to_string(),
                });
        }

        let command = match token {
            "up" => Command::Pan(PanDirection::Up),
            "down" => Command::Pan(PanDirection::Down),
            "left" => Command::Pan(PanDirection::Left),
            "right" => Command::Pan(PanDirection::Right),
            "zoom-in" => Command::ZoomIn(ZoomStep::Coarse),
            "zoom-out" => Command::ZoomOut(ZoomStep::Coarse),
            "zoom-in-fine" => Command::ZoomIn(ZoomStep::Fine),
            "zoom-out-fine" => Command::ZoomOut(ZoomStep::Fine),
            "reset" => Command::Reset,
            "more-iterations" => Command::IncreaseIterations,
            "fewer-iterations" => Command::DecreaseIterations,
            "quit" => Command::Terminate,
            _ => {
                return Err(CommandParseError::UnknownCommand {
                    token: token.to_string(),
                });
            }
        };

        Ok(command)
    }
}

fn parse_point(coords: &str) -> Option<Point> {
    let (x, y) = coords.split_once(',')?;

    Some(Point {
        x: x.trim().parse().ok()?,
        y: y.trim().parse().ok()?,
    })
}

/// Parses a whitespace-separated list of tokens, e.g. `"zoom-in up center:10,20"`.
pub fn parse_commands(script: &str) -> Result<Vec<Command>, CommandParseError> {
    script.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_every_plain_token() {
        let cases = [
            ("up", Command::Pan(PanDirection::Up)),
            ("down", Command::Pan(PanDirection::Down)),
            ("left", Command::Pan(PanDirection::Left)),
            ("right", Command::Pan(PanDirection::Right)),
            ("zoom-in", Command::ZoomIn(ZoomStep::Coarse)),
            ("zoom-out", Command::ZoomOut(ZoomStep::Coarse)),
            ("zoom-in-fine", Command::ZoomIn(ZoomStep::Fine)),
            ("zoom-out-fine", Command::ZoomOut(ZoomStep::Fine)),
            ("reset", Command::Reset),
            ("more-iterations", Command::IncreaseIterations),
            ("fewer-iterations", Command::DecreaseIterations),
            ("quit", Command::Terminate),
        ];

        for (token, expected) in cases {
            assert_eq!(token.parse::<Command>().unwrap(), expected, "{}", token);
        }
    }

    #[test]
    fn test_parses_recenter_point() {
        assert_eq!(
            "center:120, 45".parse::<Command>().unwrap(),
            Command::Recenter(Point { x: 120, y: 45 })
        );
        assert_eq!(
            "center:120,45".parse::<Command>().unwrap(),
            Command::Recenter(Point { x: 120, y: 45 })
        );
        assert_eq!(
            "center:-3,7".parse::<Command>().unwrap(),
            Command::Recenter(Point { x: -3, y: 7 })
        );
    }

    #[test]
    fn test_rejects_bad_tokens() {
        assert_eq!(
            "sideways".parse::<Command>(),
            Err(CommandParseError::UnknownCommand {
                token: "sideways".to_string()
            })
        );
        assert_eq!(
            "center:1".parse::<Command>(),
            Err(CommandParseError::InvalidPoint {
                token: "center:1".to_string()
            })
        );
        assert!(matches!(
            "center:a,b".parse::<Command>(),
            Err(CommandParseError::InvalidPoint { .. })
        ));
    }

    #[test]
    fn test_parse_commands_splits_on_whitespace() {
        let commands = parse_commands("zoom-in\n up  center:1,2\tquit").unwrap();

        assert_eq!(
            commands,
            vec![
                Command::ZoomIn(ZoomStep::Coarse),
                Command::Pan(PanDirection::Up),
                Command::Recenter(Point { x: 1, y: 2 }),
                Command::Terminate,
            ]
        );
        assert!(parse_commands("").unwrap().is_empty());
        assert!(parse_commands("up nope").is_err());
    }
}
