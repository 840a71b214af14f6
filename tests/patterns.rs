use infinite_life::coord::Coord;
use infinite_life::pattern::{blinker, glider, parse_cells, toad, ParseError};

#[test]
fn parses_the_external_comma_form() {
    assert_eq!("2,3".parse::<Coord>().unwrap(), Coord::new(2, 3));
    assert_eq!("-7, 4".parse::<Coord>().unwrap(), Coord::new(-7, 4));
    assert_eq!(" 0 , 0 ".parse::<Coord>().unwrap(), Coord::new(0, 0));
}

#[test]
fn display_matches_the_external_form() {
    assert_eq!(Coord::new(-3, 7).to_string(), "-3,7");
    assert_eq!("12,-9".parse::<Coord>().unwrap().to_string(), "12,-9");
}

#[test]
fn rejects_wrong_arity() {
    for input in ["", "2", "2,3,4", "2,3,"] {
        match input.parse::<Coord>() {
            Err(ParseError::BadArity { input: got }) => assert_eq!(got, input),
            other => panic!("expected BadArity for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn rejects_non_integer_components() {
    match "a,3".parse::<Coord>() {
        Err(ParseError::BadInteger { component, .. }) => assert_eq!(component, "a"),
        other => panic!("expected BadInteger, got {other:?}"),
    }
    match "2,3.5".parse::<Coord>() {
        Err(ParseError::BadInteger { component, .. }) => assert_eq!(component, "3.5"),
        other => panic!("expected BadInteger, got {other:?}"),
    }
}

#[test]
fn parse_cells_collects_and_deduplicates() {
    let set = parse_cells(["1,1", "1,1", "2,2"]).unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&Coord::new(1, 1)));
    assert!(set.contains(&Coord::new(2, 2)));
}

#[test]
fn parse_cells_reports_the_first_bad_cell() {
    let err = parse_cells(["1,1", "nope", "2,2"]).unwrap_err();
    assert!(matches!(err, ParseError::BadArity { .. } | ParseError::BadInteger { .. }));
}

#[test]
fn presets_have_their_canonical_populations() {
    assert_eq!(blinker().len(), 3);
    assert_eq!(toad().len(), 6);
    assert_eq!(glider().len(), 5);

    assert!(blinker().contains(&Coord::new(2, 3)));
    assert!(glider().contains(&Coord::new(2, 4)));
}
