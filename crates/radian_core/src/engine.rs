//! Reactive binding engine
//!
//! Owns a scene's tracked parameters, its in-flight interpolations, and
//! its derived bindings. The host animation driver calls
//! [`BindingEngine::advance`] once per frame; the engine advances every
//! interpolation, then recomputes every binding in dependency order and
//! pushes each result into its drawable.
//!
//! Bindings declare their inputs explicitly (parameters or other
//! bindings) instead of capturing scene state in closures. That makes
//! the dependency graph visible, so cycles are rejected at definition
//! time and the recompute order is deterministic: topological order over
//! binding-to-binding edges, declaration order as the tie-break.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::drawable::Drawable;
use crate::easing::Easing;
use crate::error::{BindingError, Result};
use crate::geometry::{GeometricValue, InputValue, Scalar};
use crate::interp::Interpolation;

new_key_type! {
    /// Handle to a tracked parameter
    pub struct ParameterId;

    /// Handle to a derived binding
    pub struct BindingId;

    /// Handle to an in-flight interpolation
    pub struct InterpolationId;
}

/// One declared input of a derived binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingInput {
    /// Current value of a tracked parameter
    Parameter(ParameterId),
    /// Output of another binding, as computed earlier in the same frame
    Binding(BindingId),
}

impl From<ParameterId> for BindingInput {
    fn from(id: ParameterId) -> Self {
        BindingInput::Parameter(id)
    }
}

impl From<BindingId> for BindingInput {
    fn from(id: BindingId) -> Self {
        BindingInput::Binding(id)
    }
}

/// A binding's compute function: resolved input values in declaration
/// order to a geometric output. Must be pure.
pub type ComputeFn = Box<dyn Fn(&[InputValue]) -> GeometricValue>;

struct TrackedParameter {
    name: String,
    value: Scalar,
}

struct BindingDef {
    inputs: SmallVec<[BindingInput; 4]>,
    compute: ComputeFn,
}

struct DerivedBinding {
    /// Declaration sequence number, the recompute-order tie-break
    seq: u64,
    drawable: Box<dyn Drawable>,
    /// None while declared but not yet defined
    def: Option<BindingDef>,
}

/// Reactive binding engine for one scene session.
#[derive(Default)]
pub struct BindingEngine {
    parameters: SlotMap<ParameterId, TrackedParameter>,
    names: FxHashMap<String, ParameterId>,
    bindings: SlotMap<BindingId, DerivedBinding>,
    /// Last computed output per binding. Absent until the binding is
    /// defined and all of its upstream bindings have produced a value.
    outputs: SecondaryMap<BindingId, GeometricValue>,
    /// Recompute order: topological over binding edges, declaration
    /// order as tie-break. Rebuilt whenever a definition adds edges.
    order: Vec<BindingId>,
    interpolations: SlotMap<InterpolationId, Interpolation>,
    /// At most one in-flight interpolation per parameter
    active: FxHashMap<ParameterId, InterpolationId>,
    next_seq: u64,
}

impl BindingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ────────────────────────────────────────────────────────────────
    // Parameters
    // ────────────────────────────────────────────────────────────────

    /// Register a named tracked parameter with its initial value.
    pub fn register_parameter(
        &mut self,
        name: impl Into<String>,
        initial: Scalar,
    ) -> Result<ParameterId> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(BindingError::DuplicateName(name));
        }
        let id = self.parameters.insert(TrackedParameter {
            name: name.clone(),
            value: initial,
        });
        debug!(%name, initial, "parameter registered");
        self.names.insert(name, id);
        Ok(id)
    }

    /// Current value of a parameter.
    pub fn parameter(&self, id: ParameterId) -> Result<Scalar> {
        self.parameters
            .get(id)
            .map(|p| p.value)
            .ok_or(BindingError::UnknownParameter)
    }

    /// Look up a parameter handle by its registered name.
    pub fn parameter_by_name(&self, name: &str) -> Option<ParameterId> {
        self.names.get(name).copied()
    }

    /// Set a parameter immediately, cancelling any in-flight
    /// interpolation targeting it. Bindings reflect the new value on the
    /// next recompute pass.
    pub fn set_parameter(&mut self, id: ParameterId, value: Scalar) -> Result<()> {
        let param = self
            .parameters
            .get_mut(id)
            .ok_or(BindingError::UnknownParameter)?;
        param.value = value;
        trace!(name = %param.name, value, "parameter set");
        if let Some(interp_id) = self.active.remove(&id) {
            self.interpolations.remove(interp_id);
        }
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────
    // Interpolations
    // ────────────────────────────────────────────────────────────────

    /// Start a timed transition of a parameter toward a target value.
    /// Supersedes (discards) any in-flight interpolation on the same
    /// parameter; the new transition starts from the current value.
    pub fn animate_parameter(
        &mut self,
        id: ParameterId,
        target: Scalar,
        duration: Scalar,
        easing: Easing,
    ) -> Result<InterpolationId> {
        let param = self
            .parameters
            .get(id)
            .ok_or(BindingError::UnknownParameter)?;
        if !(duration > 0.0) {
            return Err(BindingError::InvalidDuration(duration));
        }

        if let Some(prior) = self.active.remove(&id) {
            self.interpolations.remove(prior);
            trace!(name = %param.name, "interpolation superseded");
        }

        let start = param.value;
        let interp_id = self
            .interpolations
            .insert(Interpolation::new(id, start, target, duration, easing));
        self.active.insert(id, interp_id);
        debug!(name = %param.name, start, target, duration, ?easing, "interpolation started");
        Ok(interp_id)
    }

    /// Remove an in-flight interpolation without snapping to its target;
    /// the parameter keeps its last interpolated value.
    pub fn cancel(&mut self, id: InterpolationId) -> Result<()> {
        let interp = self
            .interpolations
            .remove(id)
            .ok_or(BindingError::UnknownInterpolation)?;
        self.active.remove(&interp.target());
        debug!("interpolation cancelled");
        Ok(())
    }

    /// Read access to an in-flight interpolation.
    pub fn interpolation(&self, id: InterpolationId) -> Option<&Interpolation> {
        self.interpolations.get(id)
    }

    /// Whether an interpolation handle still refers to an in-flight
    /// transition (retired and cancelled ones do not).
    pub fn interpolation_active(&self, id: InterpolationId) -> bool {
        self.interpolations.contains_key(id)
    }

    /// Whether a parameter is currently driven by an interpolation.
    pub fn is_animating(&self, id: ParameterId) -> bool {
        self.active.contains_key(&id)
    }

    // ────────────────────────────────────────────────────────────────
    // Bindings
    // ────────────────────────────────────────────────────────────────

    /// Declare a binding slot for a drawable without defining how its
    /// geometry is computed yet. Other bindings may name the returned
    /// handle as an input before [`define_binding`](Self::define_binding)
    /// is called; until then the binding (and anything downstream of it)
    /// is skipped during recompute.
    pub fn declare_binding(&mut self, drawable: Box<dyn Drawable>) -> BindingId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = self.bindings.insert(DerivedBinding {
            seq,
            drawable,
            def: None,
        });
        // No edges yet, appending keeps the order topological.
        self.order.push(id);
        debug!(seq, "binding declared");
        id
    }

    /// Define a declared binding: its ordered inputs and its compute
    /// function. Rejects definitions that would make the binding graph
    /// cyclic; a rejected definition leaves no partial state behind.
    pub fn define_binding(
        &mut self,
        id: BindingId,
        inputs: impl IntoIterator<Item = BindingInput>,
        compute: ComputeFn,
    ) -> Result<()> {
        let inputs: SmallVec<[BindingInput; 4]> = inputs.into_iter().collect();
        for input in &inputs {
            match *input {
                BindingInput::Parameter(p) => {
                    if !self.parameters.contains_key(p) {
                        return Err(BindingError::UnknownParameter);
                    }
                }
                BindingInput::Binding(b) => {
                    if !self.bindings.contains_key(b) {
                        return Err(BindingError::UnknownBinding);
                    }
                }
            }
        }

        let binding = self
            .bindings
            .get_mut(id)
            .ok_or(BindingError::UnknownBinding)?;
        if binding.def.is_some() {
            return Err(BindingError::AlreadyDefined);
        }
        binding.def = Some(BindingDef { inputs, compute });

        match self.toposort() {
            Some(order) => {
                self.order = order;
                debug!(bindings = self.bindings.len(), "binding defined");
                Ok(())
            }
            None => {
                // Roll the definition back, the graph must stay acyclic.
                if let Some(binding) = self.bindings.get_mut(id) {
                    binding.def = None;
                }
                Err(BindingError::CyclicDependency)
            }
        }
    }

    /// Declare and define a binding in one step.
    pub fn register_binding(
        &mut self,
        inputs: impl IntoIterator<Item = BindingInput>,
        compute: ComputeFn,
        drawable: Box<dyn Drawable>,
    ) -> Result<BindingId> {
        let id = self.declare_binding(drawable);
        if let Err(err) = self.define_binding(id, inputs, compute) {
            // No partial registration: drop the declared slot again.
            self.bindings.remove(id);
            self.order.retain(|&b| b != id);
            return Err(err);
        }
        Ok(id)
    }

    /// Last output a binding produced, if it has computed one yet.
    pub fn binding_output(&self, id: BindingId) -> Option<GeometricValue> {
        self.outputs.get(id).copied()
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn active_interpolation_count(&self) -> usize {
        self.interpolations.len()
    }

    // ────────────────────────────────────────────────────────────────
    // Frame advance
    // ────────────────────────────────────────────────────────────────

    /// Per-frame entry point: advance every in-flight interpolation by
    /// `dt` (snapping and retiring those that reach their duration),
    /// then recompute every defined binding in dependency order and push
    /// each output into its drawable.
    ///
    /// A zero (or negative) delta performs a recompute-only pass.
    pub fn advance(&mut self, dt: Scalar) {
        let dt = dt.max(0.0);
        trace!(
            dt,
            interpolations = self.interpolations.len(),
            bindings = self.bindings.len(),
            "advance"
        );

        let mut finished: SmallVec<[InterpolationId; 4]> = SmallVec::new();
        for (id, interp) in self.interpolations.iter_mut() {
            let done = interp.tick(dt);
            if let Some(param) = self.parameters.get_mut(interp.target()) {
                param.value = interp.sample();
            }
            if done {
                finished.push(id);
            }
        }
        for id in finished {
            if let Some(interp) = self.interpolations.remove(id) {
                self.active.remove(&interp.target());
                trace!("interpolation retired");
            }
        }

        self.recompute();
    }

    /// One full recompute pass in the established order.
    fn recompute(&mut self) {
        for idx in 0..self.order.len() {
            let id = self.order[idx];
            let value = {
                let Some(binding) = self.bindings.get(id) else {
                    continue;
                };
                let Some(def) = &binding.def else {
                    continue;
                };
                let mut resolved: SmallVec<[InputValue; 4]> = SmallVec::new();
                let mut missing = false;
                for input in &def.inputs {
                    match *input {
                        BindingInput::Parameter(p) => match self.parameters.get(p) {
                            Some(param) => resolved.push(InputValue::Scalar(param.value)),
                            None => {
                                missing = true;
                                break;
                            }
                        },
                        BindingInput::Binding(b) => match self.outputs.get(b) {
                            Some(output) => resolved.push(InputValue::Geometry(*output)),
                            None => {
                                missing = true;
                                break;
                            }
                        },
                    }
                }
                if missing {
                    continue;
                }
                (def.compute)(&resolved)
            };
            self.outputs.insert(id, value);
            if let Some(binding) = self.bindings.get_mut(id) {
                binding.drawable.set_geometry(value);
            }
        }
    }

    /// Kahn's algorithm over binding-to-binding edges; the ready set is
    /// ordered by declaration sequence so independent bindings keep
    /// their declaration order. Returns None when the graph is cyclic.
    fn toposort(&self) -> Option<Vec<BindingId>> {
        let mut indegree: SecondaryMap<BindingId, usize> = SecondaryMap::new();
        let mut dependents: SecondaryMap<BindingId, Vec<BindingId>> = SecondaryMap::new();
        for (id, _) in self.bindings.iter() {
            indegree.insert(id, 0);
            dependents.insert(id, Vec::new());
        }
        for (id, binding) in self.bindings.iter() {
            let Some(def) = &binding.def else { continue };
            for input in &def.inputs {
                if let BindingInput::Binding(src) = *input {
                    indegree[id] += 1;
                    dependents[src].push(id);
                }
            }
        }

        let mut ready: BTreeSet<(u64, BindingId)> = self
            .bindings
            .iter()
            .filter(|(id, _)| indegree[*id] == 0)
            .map(|(id, binding)| (binding.seq, id))
            .collect();

        let mut order = Vec::with_capacity(self.bindings.len());
        while let Some(&(seq, id)) = ready.iter().next() {
            ready.remove(&(seq, id));
            order.push(id);
            for idx in 0..dependents[id].len() {
                let dep = dependents[id][idx];
                indegree[dep] -= 1;
                if indegree[dep] == 0 {
                    ready.insert((self.bindings[dep].seq, dep));
                }
            }
        }

        (order.len() == self.bindings.len()).then_some(order)
    }
}
