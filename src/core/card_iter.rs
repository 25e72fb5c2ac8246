use super::Card;

/// Iterator over every `N` card combination of a slice of cards.
///
/// Combinations come out in lexicographic order of their indices into the
/// slice. This is what's used to find the best five card hand out of six or
/// seven cards.
///
/// ```
/// use rs_poker_equity::core::{CardIter, Deck};
///
/// let cards: Vec<_> = Deck::new().into_iter().take(7).collect();
/// assert_eq!(21, CardIter::<5>::new(&cards).count());
/// ```
#[derive(Debug, Clone)]
pub struct CardIter<'a, const N: usize> {
    // All the possible cards that can be picked
    possible_cards: &'a [Card],
    // Offsets of the next combination to emit.
    idx: [usize; N],
    done: bool,
}

impl<'a, const N: usize> CardIter<'a, N> {
    pub fn new(possible_cards: &'a [Card]) -> Self {
        Self {
            possible_cards,
            idx: std::array::from_fn(|i| i),
            done: N == 0 || possible_cards.len() < N,
        }
    }
}

impl<const N: usize> Iterator for CardIter<'_, N> {
    type Item = [Card; N];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.idx.map(|i| self.possible_cards[i]);

        // Find the right most offset that can still move forward
        // while leaving room for the offsets after it.
        let len = self.possible_cards.len();
        match (0..N).rev().find(|&level| self.idx[level] < len - N + level) {
            Some(level) => {
                self.idx[level] += 1;
                for next in level + 1..N {
                    self.idx[next] = self.idx[next - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}
