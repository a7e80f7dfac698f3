/// Fraction of the canvas width greedy wrapping measures against.
pub const GREEDY_MAX_WIDTH_FRAC: f32 = 0.9;

/// Strategy for turning a caption string into drawable lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Honor literal `\n` characters only; never reflow. The default recipe.
    #[default]
    Newline,
    /// Greedy word wrap against 90% of the canvas width, measured with the
    /// active font. Opt-in; changes the drawn line structure.
    Greedy,
}

/// Split text into lines on literal `\n` characters.
///
/// No measuring, no reflow. An empty string yields a single empty line,
/// which draws nothing but still occupies one line of vertical rhythm.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_owned).collect()
}

/// Greedy word wrap: accumulate whitespace-separated words into the current
/// line while the measured width stays under `max_width`, otherwise start a
/// new line with the word that did not fit.
///
/// `measure` returns the rendered width of a candidate line in pixels; it is
/// a callback so the algorithm itself stays pure and testable.
pub fn wrap_greedy(
    text: &str,
    max_width: f32,
    mut measure: impl FnMut(&str) -> f32,
) -> Vec<String> {
    let mut words = text.split(' ');
    let mut lines = Vec::new();
    let mut current = words.next().unwrap_or("").to_owned();

    for word in words {
        let candidate = format!("{current} {word}");
        if measure(&candidate) < max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_owned();
        }
    }
    lines.push(current);
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text.rs"]
mod tests;
