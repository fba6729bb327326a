//! Scripted input for the headless runner.
//!
//! A script is a comma-separated list of segments. Each segment names the
//! actions held and, optionally, for how many frames:
//!
//! | char | action |
//! |------|--------|
//! | `L`  | move left |
//! | `R`  | move right |
//! | `J`  | jump |
//! | `E`  | interact (chests) |
//! | `F`  | door |
//! | `.`  | nothing held |
//!
//! `R60,RJ1,R30,.10,F1` walks right for a second, jumps while still walking,
//! keeps walking, waits, then tries the door. The count defaults to 1.

use crate::resources::input::InputSnapshot;

/// A run of identical input frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSegment {
    pub input: InputSnapshot,
    pub frames: u32,
}

/// Parse a script into segments.
pub fn parse_script(text: &str) -> Result<Vec<ScriptSegment>, String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_segment)
        .collect()
}

fn parse_segment(token: &str) -> Result<ScriptSegment, String> {
    let split = token
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(token.len());
    let (keys, count) = token.split_at(split);
    if keys.is_empty() {
        return Err(format!("Segment '{}' names no actions", token));
    }

    let mut input = InputSnapshot::default();
    for c in keys.chars() {
        match c.to_ascii_uppercase() {
            'L' => input.move_left = true,
            'R' => input.move_right = true,
            'J' => input.jump = true,
            'E' => input.interact = true,
            'F' => input.door = true,
            '.' => {}
            other => return Err(format!("Unknown action '{}' in segment '{}'", other, token)),
        }
    }

    let frames = if count.is_empty() {
        1
    } else {
        count
            .parse::<u32>()
            .map_err(|e| format!("Bad frame count in segment '{}': {}", token, e))?
    };
    Ok(ScriptSegment { input, frames })
}

/// Expand segments into one snapshot per frame.
pub fn frames(segments: &[ScriptSegment]) -> impl Iterator<Item = InputSnapshot> + '_ {
    segments
        .iter()
        .flat_map(|s| std::iter::repeat_n(s.input, s.frames as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions_and_counts() {
        let script = parse_script("R60, rj, .10,F2").unwrap();
        assert_eq!(script.len(), 4);
        assert_eq!(script[0].input, InputSnapshot::right());
        assert_eq!(script[0].frames, 60);
        assert_eq!(script[1].input, InputSnapshot::right().with_jump());
        assert_eq!(script[1].frames, 1);
        assert_eq!(script[2].input, InputSnapshot::default());
        assert!(script[3].input.door);
        assert_eq!(frames(&script).count(), 73);
    }

    #[test]
    fn rejects_unknown_actions_and_bare_counts() {
        assert!(parse_script("X5").unwrap_err().contains("Unknown action"));
        assert!(parse_script("30").unwrap_err().contains("names no actions"));
        assert!(parse_script("R5x").unwrap_err().contains("Bad frame count"));
    }

    #[test]
    fn empty_script_is_empty() {
        assert!(parse_script("").unwrap().is_empty());
        assert!(parse_script(" , ").unwrap().is_empty());
    }
}
