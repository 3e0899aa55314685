use matrixgraph::graph::*;
use std::sync::Mutex;

struct Recorder(Mutex<Vec<String>>);

impl log::Log for Recorder {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.0
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder(Mutex::new(Vec::new()));

#[test]
fn structural_transforms_and_searches_are_logged() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    let mut g = ResizableAdjacencyMatrix::<i32>::new(GraphKind::DIRECTED_WEIGHTED);
    let v0 = g.add_vertex();
    let v1 = g.add_vertex();
    g.resize(3);
    g.add_weighted_edge(v0, v1, 2).unwrap();
    assert_eq!(g.shortest_distance(v0, v1), Ok(2));
    assert_eq!(g.shortest_distance(v1, v0), Ok(i32::MAX));
    g.remove_vertex(VertexId(2)).unwrap();

    let trial = RECORDER.0.lock().unwrap().clone();
    let oracle = vec![
        "DEBUG add VertexId(0)".to_string(),
        "DEBUG add VertexId(1)".to_string(),
        "DEBUG resize graph from 2 to 3 vertices".to_string(),
        "TRACE shortest path from 0 to 1 weighs 2".to_string(),
        "TRACE no path from 1 to 0".to_string(),
        "DEBUG remove VertexId(2) of 3 vertices".to_string(),
    ];
    assert_eq!(trial, oracle);
}
