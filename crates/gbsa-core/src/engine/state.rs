use nalgebra::Vector3;

/// Per-system buffers owned by the engine, sized once to the atom count.
///
/// The committed radii and chain derivatives are what the next evaluation
/// consumes. Each evaluation writes its successors into the `*_next` buffers,
/// which become current only through [`ResultState::commit`].
#[derive(Debug, Clone)]
pub struct ResultState {
    born_radii: Vec<f64>,
    obc_chain: Vec<f64>,
    born_radii_next: Vec<f64>,
    obc_chain_next: Vec<f64>,
    born_force: Vec<f64>,
    forces: Vec<Vector3<f64>>,
    committed: bool,
}

/// Disjoint views into [`ResultState`] used by the evaluation passes.
pub(crate) struct PassBuffers<'a> {
    pub born_radii: &'a [f64],
    pub obc_chain: &'a [f64],
    pub born_radii_next: &'a mut [f64],
    pub obc_chain_next: &'a mut [f64],
    pub born_force: &'a mut [f64],
    pub forces: &'a mut [Vector3<f64>],
}

impl ResultState {
    pub fn new(number_of_atoms: usize) -> Self {
        Self {
            born_radii: vec![0.0; number_of_atoms],
            obc_chain: vec![0.0; number_of_atoms],
            born_radii_next: vec![0.0; number_of_atoms],
            obc_chain_next: vec![0.0; number_of_atoms],
            born_force: vec![0.0; number_of_atoms],
            forces: vec![Vector3::zeros(); number_of_atoms],
            committed: false,
        }
    }

    pub fn number_of_atoms(&self) -> usize {
        self.born_radii.len()
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    pub fn born_radii(&self) -> Option<&[f64]> {
        self.committed.then_some(self.born_radii.as_slice())
    }

    pub fn obc_chain(&self) -> Option<&[f64]> {
        self.committed.then_some(self.obc_chain.as_slice())
    }

    /// Buffers the radius solver writes directly into. The values only count
    /// as committed after [`ResultState::mark_committed`].
    pub(crate) fn current_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.born_radii, &mut self.obc_chain)
    }

    pub(crate) fn mark_committed(&mut self) {
        self.committed = true;
    }

    pub(crate) fn invalidate(&mut self) {
        self.committed = false;
    }

    /// Zeroes the per-evaluation accumulators and hands out the pass buffers.
    pub(crate) fn begin_pass(&mut self) -> PassBuffers<'_> {
        self.born_force.fill(0.0);
        self.forces.fill(Vector3::zeros());
        PassBuffers {
            born_radii: &self.born_radii,
            obc_chain: &self.obc_chain,
            born_radii_next: &mut self.born_radii_next,
            obc_chain_next: &mut self.obc_chain_next,
            born_force: &mut self.born_force,
            forces: &mut self.forces,
        }
    }

    /// Promotes the radii computed during the last pass to current.
    pub(crate) fn commit(&mut self) {
        std::mem::swap(&mut self.born_radii, &mut self.born_radii_next);
        std::mem::swap(&mut self.obc_chain, &mut self.obc_chain_next);
        self.committed = true;
    }
}
