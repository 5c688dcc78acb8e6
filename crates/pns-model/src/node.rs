// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Graph nodes of a process network.
//!
//! A node is identified by a process-wide id drawn at construction; its name
//! is a human-readable label and is not required to be unique. Equality and
//! hashing operate on the id only. Domain payloads (prices, costs, bounds)
//! do not live here; collaborators keep them in id-keyed side tables.

use crate::{
    id::{MaterialId, UnitId},
    set::MaterialSet,
};
use std::hash::{Hash, Hasher};

/// A material flowing through the process network.
#[derive(Clone, Debug)]
pub struct Material {
    id: MaterialId,
    name: String,
}

impl Material {
    /// Creates a material with a fresh process-wide identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MaterialId::fresh(),
            name: name.into(),
        }
    }

    /// Returns the identifier of this material.
    #[inline]
    pub fn id(&self) -> MaterialId {
        self.id
    }

    /// Returns the name of this material.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Material {}

impl Hash for Material {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Material({}, {})", self.id.get(), self.name)
    }
}

/// An operating unit transforming input materials into output materials.
///
/// Input and output sets are fixed at or soon after construction;
/// [`OperatingUnit::append_input`] and [`OperatingUnit::append_output`] exist
/// for callers that assemble units incrementally. Any parallel ratio data a
/// collaborator maintains for the unit must be kept consistent with these
/// sets by that collaborator.
#[derive(Clone, Debug)]
pub struct OperatingUnit {
    id: UnitId,
    name: String,
    inputs: MaterialSet,
    outputs: MaterialSet,
}

impl OperatingUnit {
    /// Creates an operating unit with a fresh process-wide identifier.
    pub fn new(name: impl Into<String>, inputs: MaterialSet, outputs: MaterialSet) -> Self {
        Self {
            id: UnitId::fresh(),
            name: name.into(),
            inputs,
            outputs,
        }
    }

    /// Returns the identifier of this unit.
    #[inline]
    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Returns the name of this unit.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the input materials of this unit.
    #[inline]
    pub fn inputs(&self) -> &MaterialSet {
        &self.inputs
    }

    /// Returns the output materials of this unit.
    #[inline]
    pub fn outputs(&self) -> &MaterialSet {
        &self.outputs
    }

    /// Adds a further input material.
    #[inline]
    pub fn append_input(&mut self, material: MaterialId) {
        self.inputs.insert(material);
    }

    /// Adds a further output material.
    #[inline]
    pub fn append_output(&mut self, material: MaterialId) {
        self.outputs.insert(material);
    }
}

impl PartialEq for OperatingUnit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for OperatingUnit {}

impl Hash for OperatingUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for OperatingUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OperatingUnit({}, {}, inputs: {}, outputs: {})",
            self.id.get(),
            self.name,
            self.inputs.len(),
            self.outputs.len()
        )
    }
}
