use hashq::Hasher;

fn synthetic(len: usize, mul: u8, add: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(mul).wrapping_add(add))
        .collect()
}

#[test]
fn stream_8k_in_growing_chunks() {
    let message: Vec<u8> = b"aa0bb1cc2dd3ee4ff5gg6hh7ii8jj9kk".repeat(256);
    assert_eq!(message.len(), 8192);

    let mut hasher = Hasher::new(0xdeadbeef);
    let mut offset = 0;
    let mut size = 0;
    while offset < message.len() {
        let end = (offset + size).min(message.len());
        hasher.update(&message[offset..end]).expect("update");
        offset = end;
        size = (size + 1) % 128;
    }
    assert_eq!(hasher.finish(b"").expect("finish"), "099a2c9bf44c34b9");
}

#[test]
fn every_split_point_matches_one_shot() {
    // 300 bytes spans the short, medium, and multi-round code paths as the
    // split moves across the step, round, and update-block boundaries.
    let message = synthetic(300, 31, 5);
    let expected = Hasher::hash(&message, 7);
    assert_eq!(expected, "17e9dbbedba88b56");

    for cut in 0..=message.len() {
        let mut hasher = Hasher::new(7);
        hasher.update(&message[..cut]).expect("update");
        let digest = hasher.finish(&message[cut..]).expect("finish");
        assert_eq!(digest, expected, "split at {cut}");
    }
}

#[test]
fn round_multiple_lengths_match_one_shot() {
    // Lengths landing exactly on round and update-block boundaries are the
    // historically fragile cases for streaming absorbers.
    for len in [16, 32, 48, 63, 64, 65, 96, 112, 128, 144, 192, 240, 256] {
        let message = synthetic(len, 7, 13);
        let expected = Hasher::hash(&message, 5);
        for cut in 0..=len {
            let mut hasher = Hasher::new(5);
            hasher.update(&message[..cut]).expect("update");
            assert_eq!(
                hasher.finish(&message[cut..]).expect("finish"),
                expected,
                "len {len} split {cut}"
            );
        }
    }
    assert_eq!(Hasher::hash(&synthetic(192, 7, 13), 5), "188fde75bd51c306");
}

#[test]
fn many_small_chunks_match_one_shot() {
    let message = synthetic(300, 31, 5);
    let expected = Hasher::hash(&message, 7);

    let mut hasher = Hasher::new(7);
    let mut offset = 0;
    for size in [0usize, 1, 2, 3, 5, 7, 11, 13, 17, 19, 23, 64, 65, 33] {
        hasher.update(&message[offset..offset + size]).expect("update");
        offset += size;
    }
    assert_eq!(hasher.finish(&message[offset..]).expect("finish"), expected);
}

#[test]
fn digest_is_deterministic_across_instances() {
    let message = synthetic(1000, 13, 1);
    assert_eq!(Hasher::hash(&message, 11), Hasher::hash(&message, 11));
}

#[test]
fn seeds_select_different_digests() {
    let message = b"fixed message";
    assert_ne!(Hasher::hash(message, 0), Hasher::hash(message, 1));
    assert_ne!(Hasher::hash(message, 0), Hasher::hash(message, u64::MAX));
}

#[test]
fn empty_updates_do_not_perturb_the_stream() {
    let message = b"0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdefXYZ";
    let mut hasher = Hasher::new(3);
    hasher.update(b"").expect("update");
    hasher.update(&message[..64]).expect("update");
    hasher.update(b"").expect("update");
    assert_eq!(
        hasher.finish(&message[64..]).expect("finish"),
        Hasher::hash(message, 3)
    );
}
