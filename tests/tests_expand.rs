//! Expander Tests
//!
//! Path counts, odometer ordering and tag propagation.

use dotpath::expand::{ExpandOptions, Expansion, Path, Segment, expand, expand_lazy, expand_parallel};
use dotpath::parse_str;
use rstest::rstest;

fn names(path: &Path) -> Vec<&str> {
    path.names().collect()
}

#[rstest]
#[case(".usr", 1)]
#[case(".usr.local.bin", 1)]
#[case(".[a|b|c]", 3)]
#[case(".usr.[a|b|c].x", 3)]
#[case(".[a|b].[c|d|e]", 6)]
#[case(".[a|b].m.[c|d|e].{file}[f|g|h|i]", 24)]
#[case(".[a|a]", 2)]
fn test_path_count_is_product_of_block_sizes(#[case] input: &str, #[case] expected: usize) {
    let doc = parse_str(input).unwrap();
    let paths = expand(&doc).unwrap();
    assert_eq!(paths.len(), expected);
    for path in &paths {
        assert_eq!(path.len(), doc.len());
    }
}

#[test]
fn test_no_repeats_yields_identifiers_in_order() {
    let doc = parse_str(".usr.{directory}share.doc").unwrap();
    let paths = expand(&doc).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(names(&paths[0]), vec!["usr", "share", "doc"]);
}

#[test]
fn test_single_block_varies_only_its_position() {
    let doc = parse_str(".usr.[tmp|temp|scratch].rpringle.{file}settings").unwrap();
    let paths = expand(&doc).unwrap();
    let rendered: Vec<Vec<&str>> = paths.iter().map(names).collect();
    assert_eq!(
        rendered,
        vec![
            vec!["usr", "tmp", "rpringle", "settings"],
            vec!["usr", "temp", "rpringle", "settings"],
            vec!["usr", "scratch", "rpringle", "settings"],
        ]
    );
    for path in &paths {
        assert_eq!(path.segments()[3], Segment::tagged("settings", "file"));
        assert_eq!(path.segments()[0].tag, None);
    }
}

#[test]
fn test_typed_repeat_tags_every_alternative() {
    let doc = parse_str(".usr.tmp.{file}[test|scratch]").unwrap();
    let paths = expand(&doc).unwrap();
    assert_eq!(
        paths.iter().map(|p| p.segments().to_vec()).collect::<Vec<_>>(),
        vec![
            vec![Segment::plain("usr"), Segment::plain("tmp"), Segment::tagged("test", "file")],
            vec![Segment::plain("usr"), Segment::plain("tmp"), Segment::tagged("scratch", "file")],
        ]
    );
}

#[test]
fn test_odometer_order_across_blocks() {
    let doc = parse_str(".{folder}[local|cloud].{user}rpringle.{stage}[home|work]").unwrap();
    let joined: Vec<String> = expand(&doc).unwrap().iter().map(|p| p.to_string()).collect();
    assert_eq!(
        joined,
        vec![
            "/local/rpringle/home",
            "/local/rpringle/work",
            "/cloud/rpringle/home",
            "/cloud/rpringle/work",
        ]
    );
}

#[test]
fn test_lazy_expansion_is_restartable() {
    let doc = parse_str(".[a|b].[c|d]").unwrap();
    let expansion = expand_lazy(&doc, &ExpandOptions::default()).unwrap();
    let first: Vec<Path> = expansion.clone().collect();
    let second: Vec<Path> = expansion.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn test_cap_is_checked_before_materialising() {
    // 10^6 paths: rejected immediately under a small cap
    let doc = parse_str(&".[0|1|2|3|4|5|6|7|8|9]".repeat(6)).unwrap();
    let err = expand_lazy(&doc, &ExpandOptions::new().with_max_paths(1000)).unwrap_err();
    assert_eq!(err.to_string(), "document expands to 1000000 paths, more than the limit of 1000");

    let expansion = Expansion::new(&doc).unwrap();
    assert_eq!(expansion.total(), 1_000_000);
    assert_eq!(
        expansion.get(123_456).map(|p| p.to_string()),
        Some("/1/2/3/4/5/6".to_string())
    );
}

#[test]
fn test_parallel_expansion_preserves_order() {
    let doc = parse_str(".[a|b|c|d].[e|f|g].{file}[h|i|j|k|l]").unwrap();
    let options = ExpandOptions::default();
    assert_eq!(expand_parallel(&doc, &options).unwrap(), expand(&doc).unwrap());
}
