use crate::pos::KoreanPos;

const MAX_COST: i32 = i32::MAX;
const INVALID_IDX: usize = usize::MAX;

/// A candidate token proposed by the lattice builder.
#[derive(Clone, Debug)]
pub(crate) struct Candidate {
    pub pos: KoreanPos,
    pub word_cost: i32,
    pub stem: Option<String>,
    pub unknown: bool,
}

impl Candidate {
    pub fn new(pos: KoreanPos, word_cost: i32) -> Self {
        Self {
            pos,
            word_cost,
            stem: None,
            unknown: false,
        }
    }

    pub fn with_stem(mut self, stem: String) -> Self {
        self.stem = Some(stem);
        self
    }

    pub fn unknown(mut self) -> Self {
        self.unknown = true;
        self
    }
}

/// A lattice edge settled at its end position, carrying the best-known
/// path cost from BOS and a backpointer into `ends[start]`.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub start: usize,
    pub pos: KoreanPos,
    pub stem: Option<String>,
    pub unknown: bool,
    min_idx: usize,
    min_cost: i32,
}

/// Cost of placing `right` immediately after `left`. Negative values
/// reward canonical adjacencies; Noun after Noun is penalized to
/// discourage over-splitting compounds.
pub(crate) fn connection_cost(left: KoreanPos, right: KoreanPos) -> i32 {
    use KoreanPos::*;
    match (left, right) {
        (Noun, Josa) | (Noun, Suffix) | (Suffix, Josa) => -30,
        (Verb, Eomi) | (Adjective, Eomi) => -30,
        (Modifier, Noun) | (Determiner, Noun) | (NounPrefix, Noun) => -20,
        (VerbPrefix, Verb) => -20,
        (Noun, Noun) => 20,
        _ => 0,
    }
}

/// Viterbi lattice over char positions 0..=n.
pub(crate) struct Lattice {
    ends: Vec<Vec<Node>>,
    eos: Option<Node>,
    len_char: usize,
}

impl Lattice {
    pub fn new(len_char: usize) -> Self {
        let mut ends = vec![vec![]; len_char + 1];
        // BOS carries a neutral category with no connection rules.
        ends[0].push(Node {
            start: INVALID_IDX,
            pos: KoreanPos::Others,
            stem: None,
            unknown: false,
            min_idx: INVALID_IDX,
            min_cost: 0,
        });
        Self {
            ends,
            eos: None,
            len_char,
        }
    }

    #[inline(always)]
    pub fn has_previous_node(&self, i: usize) -> bool {
        self.ends.get(i).map(|d| !d.is_empty()).unwrap_or(false)
    }

    pub fn insert_node(&mut self, start: usize, end: usize, candidate: Candidate) {
        debug_assert!(start < end);
        debug_assert!(end <= self.len_char);

        let (min_idx, min_cost) = self
            .search_min_node(start, candidate.pos)
            .expect("insert_node requires a reachable start position");

        self.ends[end].push(Node {
            start,
            pos: candidate.pos,
            stem: candidate.stem,
            unknown: candidate.unknown,
            min_idx,
            min_cost: min_cost + candidate.word_cost,
        });
    }

    pub fn insert_eos(&mut self) {
        let (min_idx, min_cost) = self
            .search_min_node_with(self.len_char, |_| 0)
            .expect("the unknown fallback guarantees a path to EOS");
        self.eos = Some(Node {
            start: self.len_char,
            pos: KoreanPos::Others,
            stem: None,
            unknown: false,
            min_idx,
            min_cost,
        });
    }

    fn search_min_node(&self, start: usize, pos: KoreanPos) -> Option<(usize, i32)> {
        self.search_min_node_with(start, |left| connection_cost(left.pos, pos))
    }

    fn search_min_node_with<F>(&self, start: usize, conn: F) -> Option<(usize, i32)>
    where
        F: Fn(&Node) -> i32,
    {
        if self.ends[start].is_empty() {
            return None;
        }
        let mut min_idx = INVALID_IDX;
        let mut min_cost = MAX_COST;
        for (i, left) in self.ends[start].iter().enumerate() {
            debug_assert_ne!(left.min_cost, MAX_COST);
            let new_cost = left.min_cost + conn(left);
            // Strict < keeps the earliest-inserted left node on ties,
            // which prefers the longer preceding token.
            if new_cost < min_cost {
                min_idx = i;
                min_cost = new_cost;
            }
        }
        debug_assert_ne!(min_idx, INVALID_IDX);
        Some((min_idx, min_cost))
    }

    /// Walks backpointers from EOS and returns the winning path as
    /// `(end, node)` pairs in left-to-right order.
    pub fn top_nodes(&self) -> Vec<(usize, Node)> {
        let mut out = vec![];
        let eos = self.eos.as_ref().expect("insert_eos must be called first");
        let mut end = eos.start;
        let mut min_idx = eos.min_idx;
        while end != 0 {
            let node = &self.ends[end][min_idx];
            out.push((end, node.clone()));
            (end, min_idx) = (node.start, node.min_idx);
        }
        out.reverse();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_edge() {
        let mut lattice = Lattice::new(2);
        lattice.insert_node(0, 2, Candidate::new(KoreanPos::Noun, 100));
        lattice.insert_eos();
        let path = lattice.top_nodes();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].0, 2);
        assert_eq!(path[0].1.start, 0);
        assert_eq!(path[0].1.pos, KoreanPos::Noun);
    }

    #[test]
    fn test_prefers_cheaper_path() {
        // One long expensive edge vs two cheap ones.
        let mut lattice = Lattice::new(2);
        lattice.insert_node(0, 2, Candidate::new(KoreanPos::Noun, 500));
        lattice.insert_node(0, 1, Candidate::new(KoreanPos::Noun, 100));
        lattice.insert_node(1, 2, Candidate::new(KoreanPos::Josa, 100));
        lattice.insert_eos();
        let path = lattice.top_nodes();
        assert_eq!(path.len(), 2);
        assert_eq!(path[1].1.pos, KoreanPos::Josa);
    }

    #[test]
    fn test_connection_cost_breaks_ties() {
        // Same word costs; Noun+Josa beats Noun+Noun via adjacency.
        let mut lattice = Lattice::new(2);
        lattice.insert_node(0, 1, Candidate::new(KoreanPos::Noun, 100));
        lattice.insert_node(1, 2, Candidate::new(KoreanPos::Noun, 100));
        lattice.insert_node(1, 2, Candidate::new(KoreanPos::Josa, 100));
        lattice.insert_eos();
        let path = lattice.top_nodes();
        assert_eq!(path[1].1.pos, KoreanPos::Josa);
    }

    #[test]
    fn test_tie_prefers_longer_first_token() {
        let mut lattice = Lattice::new(3);
        lattice.insert_node(0, 2, Candidate::new(KoreanPos::Foreign, 100));
        lattice.insert_node(0, 1, Candidate::new(KoreanPos::Foreign, 50));
        lattice.insert_node(1, 2, Candidate::new(KoreanPos::Foreign, 50));
        lattice.insert_node(2, 3, Candidate::new(KoreanPos::Foreign, 100));
        lattice.insert_eos();
        let path = lattice.top_nodes();
        assert_eq!(path[0].1.start, 0);
        assert_eq!(path[0].0, 2);
        assert_eq!(path.len(), 2);
    }
}
