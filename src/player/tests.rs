use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::mpsc;

#[test]
fn build_keeps_order_and_starts_at_index() {
    let mut rng = StdRng::seed_from_u64(3);
    let q = Queue::build(vec![4, 2, 9], PlayOptions::at(1), &mut rng);
    assert_eq!(q.tracks, vec![4, 2, 9]);
    assert_eq!(q.position, 1);
    assert_eq!(q.current(), Some(2));
    assert!(!q.shuffled);
}

#[test]
fn build_clamps_start_index_to_last_track() {
    let mut rng = StdRng::seed_from_u64(3);
    let q = Queue::build(vec![4, 2, 9], PlayOptions::at(10), &mut rng);
    assert_eq!(q.current(), Some(9));

    let empty = Queue::build(Vec::new(), PlayOptions::at(3), &mut rng);
    assert!(empty.is_empty());
    assert_eq!(empty.current(), None);
}

#[test]
fn shuffled_queue_is_a_permutation_starting_at_front() {
    let mut rng = StdRng::seed_from_u64(11);
    let input: Vec<usize> = (0..30).collect();
    let q = Queue::build(input.clone(), PlayOptions::shuffled(), &mut rng);

    assert!(q.shuffled);
    assert_eq!(q.position, 0);
    let mut sorted = q.tracks.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, input);
    // 30! orderings; the seeded shuffle is not the identity.
    assert_ne!(q.tracks, input);
}

#[test]
fn channel_radio_sends_built_queue() {
    let (tx, rx) = mpsc::channel();
    let mut radio = ChannelRadio::with_seed(tx, 5);

    radio.play_queue(vec![1, 2, 3], PlayOptions::at(2)).unwrap();
    match rx.try_recv().unwrap() {
        PlayerCmd::PlayQueue(q) => {
            assert_eq!(q.tracks, vec![1, 2, 3]);
            assert_eq!(q.current(), Some(3));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn channel_radio_skips_empty_queues() {
    let (mut radio, rx) = ChannelRadio::channel();
    radio.play_queue(Vec::new(), PlayOptions::default()).unwrap();
    assert!(rx.try_recv().is_err());
}

#[test]
fn channel_radio_reports_disconnected_player() {
    let (mut radio, rx) = ChannelRadio::channel();
    drop(rx);
    assert!(matches!(
        radio.play_queue(vec![1], PlayOptions::default()),
        Err(crate::Error::PlayerDisconnected)
    ));
}
