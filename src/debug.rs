use failure;

/// Renders the whole cause chain of an error, root cause first, so the
/// terminal output reads in the order things actually went wrong.
pub fn failure_to_string(e: failure::Error) -> String {
    use std::fmt::Write;

    let mut result = String::new();

    for (i, cause) in e.iter_chain().collect::<Vec<_>>().into_iter().rev().enumerate() {
        if i > 0 {
            let _ = writeln!(&mut result, "   Which caused the following issue:");
        }
        let _ = write!(&mut result, "{}", cause);
        if let Some(backtrace) = cause.backtrace() {
            let backtrace_str = format!("{}", backtrace);
            if backtrace_str.len() > 0 {
                let _ = writeln!(&mut result, " This happened at {}", backtrace);
            } else {
                let _ = writeln!(&mut result);
            }
        } else {
            let _ = writeln!(&mut result);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::failure_to_string;
    use failure::err_msg;

    #[test]
    fn single_error_renders_its_message() {
        let report = failure_to_string(err_msg("no window for you"));
        assert!(report.contains("no window for you"));
        assert!(!report.contains("Which caused the following issue:"));
    }

    #[test]
    fn chained_error_renders_root_cause_first() {
        let root = err_msg("shader blew up");
        let outer = root.context("while setting up the pipeline");
        let report = failure_to_string(outer.into());

        let root_at = report.find("shader blew up").unwrap();
        let outer_at = report.find("while setting up the pipeline").unwrap();
        assert!(root_at < outer_at);
        assert!(report.contains("Which caused the following issue:"));
    }
}
