use honggfuzz::fuzz;
use unique_chars::{first_duplicate, is_unique, ASCII_SIZE};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let unique = is_unique(data);
            if data.len() > ASCII_SIZE {
                assert!(!unique);
            } else {
                assert_eq!(unique, first_duplicate(data).is_none());
            }
        });
    }
}
