use std::convert::Infallible;
use warp::sse::Event;

/// Split an upstream text fragment on line boundaries.
///
/// SSE data cannot carry raw newlines in a single line, so a fragment that
/// spans lines becomes one event per non-empty piece.
pub fn fragment_lines(fragment: &str) -> impl Iterator<Item = &str> {
    fragment.split('\n').filter(|line| !line.is_empty())
}

/// Create an SSE event carrying one line of model output
pub fn create_text_event(line: &str) -> Result<Event, Infallible> {
    Ok(Event::default().data(line))
}

/// Create a done SSE event to signal clean stream completion
pub fn create_done_event() -> Result<Event, Infallible> {
    Ok(Event::default().event("done").data(""))
}

/// Create an error SSE event, emitted just before the stream is closed
pub fn create_error_event() -> Result<Event, Infallible> {
    Ok(Event::default().event("error").data("upstream failure"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_without_newline_is_one_line() {
        let lines: Vec<&str> = fragment_lines("Hello world").collect();
        assert_eq!(lines, vec!["Hello world"]);
    }

    #[test]
    fn test_fragment_splits_on_newlines() {
        let lines: Vec<&str> = fragment_lines("first\nsecond\nthird").collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_fragment_drops_empty_pieces() {
        let lines: Vec<&str> = fragment_lines("end of paragraph\n\nnext paragraph\n").collect();
        assert_eq!(lines, vec!["end of paragraph", "next paragraph"]);
    }

    #[test]
    fn test_newline_only_fragment_is_empty() {
        assert_eq!(fragment_lines("\n").count(), 0);
        assert_eq!(fragment_lines("").count(), 0);
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let lines: Vec<&str> = fragment_lines("  indented").collect();
        assert_eq!(lines, vec!["  indented"]);
    }

    #[test]
    fn test_create_text_event() {
        let result = create_text_event("Hello world");
        assert!(result.is_ok());
    }

    #[test]
    fn test_create_done_event() {
        let result = create_done_event();
        assert!(result.is_ok());
    }

    #[test]
    fn test_create_error_event() {
        let result = create_error_event();
        assert!(result.is_ok());
    }
}
