use super::*;

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average out-degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs generate every possible directed edge in a graph with `n` nodes with
/// probability `p` independent from each other. Each generated edge gets a label drawn
/// uniformly from the label range (`0..1` by default, i.e. all labels are `0`).
#[derive(Debug, Clone)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
    labels: Range<Label>,
    loops: bool,
}

impl Default for Gnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: GnpType::NotSet,
            labels: 0..1,
            loops: true,
        }
    }
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is not a probability");
        self.p = GnpType::Prob(prob);
        self
    }

    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    pub fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }

    /// Updates the range labels are drawn from
    pub fn labels(mut self, labels: Range<Label>) -> Self {
        assert!(!labels.is_empty(), "label range must not be empty");
        self.labels = labels;
        self
    }

    /// Never generate self-loops
    pub fn no_loops(mut self) -> Self {
        self.loops = false;
        self
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges in lexicographic order
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = LabelledEdge>
    where
        R: Rng,
    {
        let n = self.n;
        let p = match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = d / n.max(1) as f64;
                assert!(
                    (0.0..=1.0).contains(&p),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        };
        let labels = self.labels.clone();
        let loops = self.loops;

        (0..n)
            .flat_map(move |u| (0..n).map(move |v| (u, v)))
            .filter(move |&(u, v)| loops || u != v)
            .filter_map(move |(u, v)| {
                rng.random_bool(p)
                    .then(|| LabelledEdge(u, rng.random_range(labels.clone()), v))
            })
    }
}
