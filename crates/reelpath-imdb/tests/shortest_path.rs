//! Shortest path searches over the bundled test dataset

use reelpath_core::{Path, PathFinder};
use reelpath_imdb::{MovieGraph, NodeRef};

fn data_file(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn make_graph() -> MovieGraph {
    MovieGraph::load(data_file("testActors.tsv"), data_file("testMovies.tsv")).unwrap()
}

fn assert_names(path: &Path<NodeRef<'_>>, expected: &[&str]) {
    assert_eq!(path.len(), expected.len());
    assert_eq!(path.names(), expected);
}

#[test]
fn test_shortest_path_between_actors() {
    let graph = make_graph();
    let finder = PathFinder::new();

    let kris = graph.actor("Kris");
    let sandy = graph.actor("Sandy");
    let path = finder.find_shortest_path(kris.as_ref(), sandy.as_ref()).unwrap();

    assert_names(&path, &["Kris", "Blah2", "Sara", "Blah3", "Sandy"]);
    assert!(path.is_connected());
}

#[test]
fn test_same_node() {
    let graph = make_graph();

    let uyen = graph.actor("Uyen");
    let path = PathFinder::new()
        .find_shortest_path(uyen.as_ref(), uyen.as_ref())
        .unwrap();

    assert_names(&path, &["Uyen"]);
}

#[test]
fn test_no_path() {
    let graph = make_graph();

    let uyen2 = graph.actor("Uyen2");
    let kris = graph.actor("Kris");
    assert!(uyen2.is_some());

    let path = PathFinder::new().find_shortest_path(uyen2.as_ref(), kris.as_ref());
    assert!(path.is_none());
}

#[test]
fn test_not_an_actor() {
    let graph = make_graph();

    let uyen3 = graph.actor("Uyen3");
    let aa = graph.actor("aa");
    assert!(uyen3.is_none());
    assert!(aa.is_none());

    let path = PathFinder::new().find_shortest_path(uyen3.as_ref(), aa.as_ref());
    assert!(path.is_none());
}

#[test]
fn test_starting_node_missing() {
    let graph = make_graph();

    let aa = graph.movie("aa");
    let kris = graph.actor("Kris");
    assert!(aa.is_none());

    assert!(PathFinder::new().find_shortest_path(aa.as_ref(), kris.as_ref()).is_none());
    assert!(PathFinder::new().find_shortest_path(kris.as_ref(), aa.as_ref()).is_none());
}

#[test]
fn test_two_middle_nodes() {
    let graph = make_graph();

    let sara = graph.actor("Sara");
    let sandy = graph.actor("Sandy");
    let path = PathFinder::new()
        .find_shortest_path(sara.as_ref(), sandy.as_ref())
        .unwrap();

    assert_names(&path, &["Sara", "Blah3", "Sandy"]);
}

#[test]
fn test_two_movies() {
    let graph = make_graph();

    let blah1 = graph.movie("Blah1");
    let blah3 = graph.movie("Blah3");
    let path = PathFinder::new()
        .find_shortest_path(blah1.as_ref(), blah3.as_ref())
        .unwrap();

    assert_names(&path, &["Blah1", "Kris", "Blah2", "Sara", "Blah3"]);
}

#[test]
fn test_path_between_movie_and_actor() {
    let graph = make_graph();

    let blah1 = graph.movie("Blah1");
    let sandy = graph.actor("Sandy");
    let path = PathFinder::new()
        .find_shortest_path(blah1.as_ref(), sandy.as_ref())
        .unwrap();

    assert_names(&path, &["Blah1", "Kris", "Blah2", "Sara", "Blah3", "Sandy"]);
    assert!(path.start().is_movie());
    assert!(path.end().is_actor());
}

#[test]
fn test_reused_finder_does_not_leak_state() {
    let graph = make_graph();
    let shared = PathFinder::new();

    let pairs = [
        ("Kris", "Sandy"),
        ("Sara", "Sandy"),
        ("Uyen2", "Kris"),
        ("Sandy", "Kris"),
        ("Uyen", "Uyen"),
    ];

    for (from, to) in pairs {
        let (from, to) = (graph.actor(from), graph.actor(to));
        let reused = shared.find_shortest_path(from.as_ref(), to.as_ref());
        let fresh = PathFinder::new().find_shortest_path(from.as_ref(), to.as_ref());
        assert_eq!(reused, fresh);
    }
}

#[test]
fn test_search_stats() {
    let graph = make_graph();

    let kris = graph.actor("Kris");
    let sandy = graph.actor("Sandy");
    let outcome = PathFinder::new().search(kris.as_ref(), sandy.as_ref());

    assert!(outcome.stats.path_found);
    assert_eq!(outcome.path.map(|p| p.hops()), Some(4));
    // Kris, Blah1, Blah2, Sara, Blah3
    assert_eq!(outcome.stats.nodes_expanded, 5);
}
