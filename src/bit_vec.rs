// Rank and select support for boolean vectors.
// Conventions: rank is exclusive (counts bits in [0, index)) and select is 0-based,
// so select1(n) is the index of the (n+1)-th one and rank1(select1(n)) == n.

// You should implement:
// - rank1
// - select1 and select0
// - num_ones
// - len
pub trait BitVec {
    fn rank1(&self, index: usize) -> usize;

    fn rank0(&self, index: usize) -> usize {
        default_rank0(self, index)
    }

    fn select1(&self, n: usize) -> Option<usize>;

    fn select0(&self, n: usize) -> Option<usize>;

    fn num_ones(&self) -> usize;

    fn num_zeros(&self) -> usize {
        self.len() - self.num_ones()
    }

    fn len(&self) -> usize;
}

/// Default impl of rank0 using rank1
pub fn default_rank0<T: BitVec + ?Sized>(bv: &T, index: usize) -> usize {
    if index >= bv.len() {
        return bv.num_zeros();
    }
    index - bv.rank1(index)
}

#[cfg(test)]
pub fn test_bitvector_vs_naive<T: BitVec>(new: impl Fn(&[bool]) -> T) {
    use exhaustigen::Gen;

    let mut test_cases: Vec<Vec<bool>> = vec![
        vec![],
        vec![true; 150],
        vec![false; 150],
        (0..150).map(|i| i % 2 == 0).collect(),
        (0..150).map(|i| i % 37 < 10).collect(),
    ];

    {
        // Generate all 2^k bit patterns of length k
        let k = 10;
        let input: Vec<_> = (0..k).collect();
        let mut gen = Gen::new();
        while !gen.done() {
            let ones: Vec<usize> = gen.gen_subset(&input).copied().collect();
            test_cases.push((0..k).map(|i| ones.contains(&i)).collect());
        }
    }

    for bits in test_cases {
        let bv = new(&bits);
        let ones: Vec<usize> = (0..bits.len()).filter(|&i| bits[i]).collect();
        let zeros: Vec<usize> = (0..bits.len()).filter(|&i| !bits[i]).collect();

        // test basic properties
        assert_eq!(bv.len(), bits.len(), "unequal lengths");
        assert_eq!(bv.num_ones(), ones.len());
        assert_eq!(bv.num_zeros(), zeros.len());
        assert_eq!(bv.num_ones(), bv.rank1(bv.len()));
        assert_eq!(bv.num_zeros(), bv.rank0(bv.len()));

        // test rank0 and rank1
        for i in 0..bits.len() + 2 {
            let expected = ones.iter().filter(|&&j| j < i).count();
            assert_eq!(bv.rank1(i), expected);
            assert_eq!(bv.rank0(i), i.min(bits.len()) - expected);
        }

        // test select0 and select1
        for (n, &i) in ones.iter().enumerate() {
            assert_eq!(bv.select1(n), Some(i));
        }
        assert_eq!(bv.select1(ones.len()), None);
        for (n, &i) in zeros.iter().enumerate() {
            assert_eq!(bv.select0(n), Some(i));
        }
        assert_eq!(bv.select0(zeros.len()), None);
    }
}
