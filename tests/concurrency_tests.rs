//! Concurrency tests: load/process mutual exclusion and metadata atomicity.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use wavebend::{
    AudioBuffer, ClosureGraph, GraphLoader, InferenceGraph, ModelCard, ParamMap, Session, Tensor,
    MODEL_PATH_KEY,
};

/// Loader producing a constant-gain graph; the gain is the numeric file
/// stem, e.g. `2.bin` scales by 2.0. The forward pass sleeps briefly to
/// widen any interleaving window.
fn slow_gain_loader() -> GraphLoader {
    Box::new(|path| {
        let gain: f32 = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| "gain stem expected".to_string())?;

        let card = ModelCard {
            name: format!("gain {gain}"),
            description: "constant gain".into(),
            author: "concurrency tests".into(),
            sample_rate: 44100,
            tags: vec!["gain".into()],
        };
        Ok(Box::new(ClosureGraph::new(card, move |input, _| {
            thread::sleep(Duration::from_millis(1));
            let data = input.data().iter().map(|s| s * gain).collect();
            Tensor::from_rows(input.dim(0), input.dim(1), data).map_err(|e| e.to_string())
        })) as Box<dyn InferenceGraph>)
    })
}

fn path_params(path: &str) -> ParamMap {
    let mut params = ParamMap::new();
    params.insert(MODEL_PATH_KEY.into(), path.into());
    params
}

/// Every processed buffer must reflect exactly one graph: either the old
/// gain or the new one, uniformly across all samples. A torn read of a
/// mid-replacement graph would show up as mixed or missing scaling.
#[test]
fn process_sees_whole_graphs_only() {
    let session = Session::builder().loader(slow_gain_loader()).build().unwrap();
    session.load(&path_params("2.bin")).unwrap();

    let stop = Arc::new(AtomicBool::new(false));

    let loader_session = session.clone();
    let loader_stop = stop.clone();
    let loader_thread = thread::spawn(move || {
        let mut flip = false;
        while !loader_stop.load(Ordering::Relaxed) {
            let path = if flip { "3.bin" } else { "2.bin" };
            loader_session.load(&path_params(path)).unwrap();
            flip = !flip;
        }
    });

    let mut workers = Vec::new();
    for _ in 0..2 {
        let worker_session = session.clone();
        workers.push(thread::spawn(move || {
            for _ in 0..50 {
                let mut buffer = AudioBuffer::from_channels(vec![vec![1.0; 64]]).unwrap();
                worker_session
                    .process(&mut buffer, 44100, &ParamMap::new())
                    .unwrap();

                let first = buffer.channel(0)[0];
                assert!(
                    buffer.channel(0).iter().all(|&s| s == first),
                    "buffer scaled non-uniformly: saw a torn graph"
                );
                assert!(
                    first == 2.0 || first == 3.0,
                    "unexpected gain {first}: graph seen mid-replacement"
                );
            }
        }));
    }

    for worker in workers {
        worker.join().unwrap();
    }
    stop.store(true, Ordering::Relaxed);
    loader_thread.join().unwrap();
}

/// A listener registered before a threaded load must observe a card with
/// every field populated, never a partial one.
#[test]
fn listener_observes_fully_populated_card() {
    let session = Session::builder().loader(slow_gain_loader()).build().unwrap();

    let (tx, rx) = crossbeam_channel::bounded::<ModelCard>(4);
    session.add_listener(move |card| {
        tx.send(card.clone()).unwrap();
    });

    let load_session = session.clone();
    let load_thread = thread::spawn(move || {
        load_session.load(&path_params("2.bin")).unwrap();
    });

    let card = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(card.name, "gain 2");
    assert_eq!(card.description, "constant gain");
    assert_eq!(card.author, "concurrency tests");
    assert_eq!(card.sample_rate, 44100);
    assert_eq!(card.tags, vec!["gain"]);

    load_thread.join().unwrap();
}

/// `ready()` must be callable from any thread without blocking on a load
/// in progress.
#[test]
fn ready_is_lock_free_during_slow_load() {
    // loader that stalls long enough for the main thread to poll
    let loader: GraphLoader = Box::new(|_| {
        thread::sleep(Duration::from_millis(200));
        let card = ModelCard {
            name: "slow".into(),
            description: "slow to deserialize".into(),
            author: "concurrency tests".into(),
            sample_rate: 44100,
            tags: vec![],
        };
        Ok(Box::new(ClosureGraph::new(card, |input, _| Ok(input.clone())))
            as Box<dyn InferenceGraph>)
    });

    let session = Session::builder().loader(loader).build().unwrap();

    let load_session = session.clone();
    let load_thread = thread::spawn(move || {
        load_session.load(&path_params("slow.bin")).unwrap();
    });

    // polls return promptly while the load holds the graph lock
    let poll_start = std::time::Instant::now();
    while !session.ready() {
        assert!(
            poll_start.elapsed() < Duration::from_secs(5),
            "load never completed"
        );
        thread::sleep(Duration::from_millis(5));
    }

    load_thread.join().unwrap();
    assert!(session.ready());
    assert_eq!(session.model_name(), "slow");
}
