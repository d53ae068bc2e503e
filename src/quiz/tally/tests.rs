use super::*;
use std::thread;

#[test]
fn starts_at_zero() {
    let tally = AnswerTally::default();
    assert_eq!(tally.read(), 0);
}

#[test]
fn increments_are_visible() {
    let tally = AnswerTally::default();
    tally.increment();
    tally.increment();
    assert_eq!(tally.read(), 2);
}

#[test]
fn reading_does_not_mutate() {
    let tally = AnswerTally::default();
    tally.increment();
    assert_eq!(tally.read(), 1);
    assert_eq!(tally.read(), 1);
}

#[test]
fn concurrent_reads_stay_in_bounds() {
    let writers = 8;
    let increments_per_writer = 1000;
    let total = writers * increments_per_writer;
    let tally: TallyHandle = Arc::new(AnswerTally::default());

    let reader = {
        let tally = tally.clone();
        thread::spawn(move || {
            let mut previous = 0;
            loop {
                let current = tally.read();
                assert!(current >= previous, "tally went from {} to {}", previous, current);
                assert!(current <= total);
                previous = current;
                if current == total {
                    break;
                }
                thread::yield_now();
            }
        })
    };

    let writer_handles: Vec<_> = (0..writers)
        .map(|_| {
            let tally = tally.clone();
            thread::spawn(move || {
                for _ in 0..increments_per_writer {
                    tally.increment();
                }
            })
        })
        .collect();

    for handle in writer_handles {
        handle.join().unwrap();
    }
    reader.join().unwrap();
    assert_eq!(tally.read(), total);
}
