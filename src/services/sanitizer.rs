use regex::Regex;

/// Strips the reasoning artifacts the upstream model sometimes leaks into a
/// reply: `<think>`/`<thinking>` spans, "Thought process:" runs, and stacked
/// blank lines. Idempotent, so re-cleaning an already-clean reply is a no-op.
pub fn sanitize_response(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let reasoning = Regex::new(r"(?s)<think(?:ing)?>.*?</think(?:ing)?>").unwrap();
    let text = reasoning.replace_all(text, "");

    // A "Thought process" label (optionally bracketed) swallows everything up
    // to a blank line, a bracketed section header, or the end of the reply.
    let thought = Regex::new(r"(?s)\[?Thought process\]?:.*?(\n\s*\n|\n\[|\n=|$)").unwrap();
    let text = thought.replace_all(&text, "$1");

    let blank_runs = Regex::new(r"\n\s*\n").unwrap();
    let text = blank_runs.replace_all(&text, "\n\n");

    text.trim().to_string()
}
