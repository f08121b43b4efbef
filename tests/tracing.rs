use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use feedforward_nn::NeuralNet;

struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("feedforward_nn") {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture { records: Mutex::new(Vec::new()) };

fn take_records() -> Vec<(Level, String)> {
    std::mem::take(&mut *CAPTURE.records.lock().unwrap())
}

// A single test: the logger is process-wide.
#[test]
fn tracing_is_opt_in_per_network() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut net = NeuralNet::new(2, &[2], 1).unwrap();
    net.set_layer_weights(1, vec![54.0, 14.0, 17.0, 14.0, -8.0, -20.0]).unwrap();
    net.set_layer_weights(2, vec![92.0, -92.0, -48.0]).unwrap();
    let built = take_records();
    assert!(built.iter().any(|(level, msg)| *level == Level::Debug && msg.starts_with("built network")));

    let quiet = net.infer(&[1.0, 0.0]).unwrap();
    assert!(take_records().is_empty());

    net.set_tracing(true);
    let traced = net.infer(&[1.0, 0.0]).unwrap();
    assert_eq!(traced, quiet);

    let records = take_records();
    assert!(records.iter().any(|(_, msg)| msg == "inferring [1.0, 0.0]"));
    for i in 0..3 {
        assert!(records.iter().any(|(level, msg)| *level == Level::Trace && *msg == format!("layer {i}")));
    }
    assert!(records
        .iter()
        .any(|(level, msg)| *level == Level::Trace && msg == "input layer output: [1.0, 0.0, 1.0]"));
    // two hidden neurons and one output neuron
    let neurons = records.iter().filter(|(_, msg)| msg.starts_with("neuron ")).count();
    assert_eq!(neurons, 3);
    assert!(records
        .iter()
        .any(|(_, msg)| msg.starts_with("neuron 0: weights [54.0, 17.0, -8.0], sum 46")));
}
