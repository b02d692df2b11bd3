use docbinder_core::OriginInfo;
use pretty_assertions::assert_eq;

#[test]
fn same_host_is_in_scope_regardless_of_path() {
    let origin = OriginInfo::from_seed("https://docs.example.com/docs/intro").unwrap();
    assert!(origin.in_scope("https://docs.example.com/docs/advanced"));
    assert!(origin.in_scope("https://docs.example.com/blog/post"));
    assert!(!origin.in_scope("https://other.example.com/docs/intro"));
}

#[test]
fn malformed_candidates_are_out_of_scope() {
    let origin = OriginInfo::from_seed("https://docs.example.com/").unwrap();
    assert!(!origin.in_scope("::not-a-url::"));
    assert!(!origin.in_scope("mailto:someone@docs.example.com"));
}

#[test]
fn seed_without_host_has_no_origin() {
    assert_eq!(OriginInfo::from_seed("not a url"), None);
    assert_eq!(OriginInfo::from_seed("data:text/plain,hello"), None);
}

#[test]
fn base_path_gets_slash_terminated_for_directory_like_seeds() {
    let origin = OriginInfo::from_seed("https://docs.example.com/docs/intro").unwrap();
    assert_eq!(origin.base_path(), "/docs/intro/");
    assert_eq!(origin.host(), "docs.example.com");
}

#[test]
fn base_path_keeps_file_like_final_segment() {
    let origin = OriginInfo::from_seed("https://docs.example.com/docs/index.html").unwrap();
    assert_eq!(origin.base_path(), "/docs/index.html");
}

#[test]
fn base_path_of_slash_terminated_seed_is_unchanged() {
    let origin = OriginInfo::from_seed("https://docs.example.com/docs/").unwrap();
    assert_eq!(origin.base_path(), "/docs/");
}
