use cs_core::{Extension, NormalizeError, NormalizeInput, Normalized, Rejection};

/// Checked in priority order against the first line.
const DELIMITERS: [char; 3] = [',', ';', '\t'];
const SAMPLE_LINES: usize = 5;

/// Structural CSV check; bytes pass through unchanged.
pub(super) fn normalize(input: &NormalizeInput<'_>) -> Result<Normalized, NormalizeError> {
    let text = input.text()?;
    check_structure(text)?;
    Ok(Normalized::new(text.as_bytes().to_vec(), Extension::csv()))
}

fn check_structure(text: &str) -> Result<(), Rejection> {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < 2 {
        return Err(Rejection::CsvStructure("expected at least 2 lines"));
    }

    let delimiter = DELIMITERS
        .into_iter()
        .find(|d| lines[0].contains(*d))
        .ok_or(Rejection::CsvStructure(
            "expected comma, semicolon, or tab delimiter in header",
        ))?;

    let field_counts: Vec<usize> = lines
        .iter()
        .take(SAMPLE_LINES)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.matches(delimiter).count() + 1)
        .collect();

    if field_counts.len() < 2 {
        return Err(Rejection::CsvStructure("expected at least 2 non-empty lines"));
    }
    if field_counts.iter().any(|count| *count != field_counts[0]) {
        return Err(Rejection::CsvStructure(
            "expected consistent field counts across lines",
        ));
    }
    if field_counts[0] < 2 {
        return Err(Rejection::CsvStructure("expected at least 2 fields per line"));
    }
    Ok(())
}
