#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate rs_poker_equity;
use rs_poker_equity::core::{Card, CardIter, Hand, Rankable, evaluate};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            if h.count() == 7 {
                let cards: Vec<Card> = h.iter().collect();
                let r_seven = evaluate(&cards).unwrap();
                let r_five_max = CardIter::<5>::new(&cards)
                    .map(|five| five.rank_five())
                    .max()
                    .unwrap();
                assert_eq!(r_five_max, r_seven);

                let mut reversed = cards.clone();
                reversed.reverse();
                assert_eq!(r_seven, evaluate(&reversed).unwrap());
            }
        }
    }
});
