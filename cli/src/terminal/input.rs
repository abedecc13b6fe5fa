use std::io::BufRead;

use pizzeria_common::error::MenuError;

/// Reads one line and parses it as a menu number.
pub fn read_selection<R: BufRead>(reader: &mut R) -> Result<u32, MenuError> {
    let mut line = String::new();

    if reader.read_line(&mut line)? == 0 {
        return Err(MenuError::EndOfInput);
    }

    let trimmed = line.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| MenuError::NotANumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_numbers_line_by_line() {
        let mut input = Cursor::new("3\n  12 \n");
        assert_eq!(read_selection(&mut input).unwrap(), 3);
        assert_eq!(read_selection(&mut input).unwrap(), 12);
        assert!(matches!(read_selection(&mut input), Err(MenuError::EndOfInput)));
    }

    #[test]
    fn rejects_text_and_negatives() {
        let mut input = Cursor::new("pizza\n-1\n");
        assert!(matches!(
            read_selection(&mut input),
            Err(MenuError::NotANumber(text)) if text == "pizza"
        ));
        assert!(matches!(read_selection(&mut input), Err(MenuError::NotANumber(_))));
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut input = Cursor::new("4");
        assert_eq!(read_selection(&mut input).unwrap(), 4);
    }
}
