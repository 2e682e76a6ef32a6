//! The `explain` command: display documentation for an error code.

use wce_diagnostic::{ErrorCode, ErrorDocs};

pub fn explain_error(code_str: &str) -> bool {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format WCEnnn where n is a digit.");
        eprintln!("Examples: WCE002, WCE106, WCE300");
        return false;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        println!("{doc}");
        true
    } else {
        eprintln!("No documentation available for {code}");
        false
    }
}
