//! Tests for delimited-text parsing and element-kind dispatch

#[cfg(test)]
mod tests {
    use gridstack::GridError;
    use gridstack::io::parse::{ElementKind, ParsedGrid, parse_grid};

    // Verifies kind names resolve case-insensitively with aliases
    // Verified by removing the lowercase normalization
    #[test]
    fn test_kind_from_name() {
        assert_eq!(ElementKind::from_name("int").unwrap(), ElementKind::Integer);
        assert_eq!(ElementKind::from_name("Integer").unwrap(), ElementKind::Integer);
        assert_eq!(ElementKind::from_name("double").unwrap(), ElementKind::Float);
        assert_eq!(ElementKind::from_name("STRING").unwrap(), ElementKind::Text);
        assert!(matches!(
            ElementKind::from_name("complex"),
            Err(GridError::InvalidParameter { .. })
        ));
    }

    // Tests integer parsing with the empty token and no default
    // Verified by parsing the empty token as zero
    #[test]
    fn test_parse_integers() {
        let parsed = parse_grid("1,2\n.,4\n", ElementKind::Integer, ',', None).unwrap();
        let ParsedGrid::Integer(grid) = parsed else {
            panic!("expected an integer grid");
        };
        assert_eq!(grid.cell(0, 1, 0).unwrap(), &None);
        assert_eq!(grid.cell(0, 1, 1).unwrap(), &Some(4));
    }

    // Tests that a parsed default becomes the layer default
    // Verified by parsing the default but discarding it
    #[test]
    fn test_parse_with_default() {
        let parsed = parse_grid("1,.\n", ElementKind::Integer, ',', Some("0")).unwrap();
        let ParsedGrid::Integer(grid) = parsed else {
            panic!("expected an integer grid");
        };
        assert_eq!(grid.layer(0).unwrap().default_value(), Some(&0));
        assert!(grid.is_empty(0, 0, 1).unwrap());
    }

    // Tests bad tokens report their line and kind
    // Verified by reporting the raw line content instead of the token
    #[test]
    fn test_bad_token() {
        let result = parse_grid("1\nx\n", ElementKind::Integer, ',', None);
        assert!(matches!(
            result,
            Err(GridError::ParseCell { line: 2, .. })
        ));
    }

    // Tests an unparseable default is rejected up front
    // Verified by falling back to no default on parse failure
    #[test]
    fn test_bad_default() {
        let result = parse_grid("1\n", ElementKind::Integer, ',', Some("x"));
        assert!(matches!(result, Err(GridError::InvalidParameter { .. })));
    }

    // Tests kind mismatch when stacking parsed grids
    // Verified by silently coercing the mismatched kind
    #[test]
    fn test_append_kind_mismatch() {
        let mut base = parse_grid("1,2\n", ElementKind::Integer, ',', None).unwrap();
        let text = parse_grid("a,b\n", ElementKind::Text, ',', None).unwrap();
        assert!(matches!(
            base.append_layers(text),
            Err(GridError::InvalidParameter { .. })
        ));
    }
}
