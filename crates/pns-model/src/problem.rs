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

//! # Problem Model
//!
//! A PNS problem owns its materials and operating units, a partition of the
//! materials into raw materials, intermediates, and products, the
//! mutual-exclusion groups, and the parallel-production caps. On top of
//! these it precomputes the derived indices the solver queries on every
//! expansion: producers and consumers per material and the symmetric
//! mutual-exclusion closure per unit.
//!
//! ## Construction
//!
//! `ProblemBuilder` collects nodes and constraints in any order;
//! `ProblemBuilder::build` validates the whole structure (unknown ids,
//! partition overlap) and derives all indices in one step. The resulting
//! `Problem` is immutable, so a stale derived index is unrepresentable:
//! structural changes require building a new problem. Construction faults
//! are fatal and reported as `ProblemError`; they are never recovered from
//! locally.

use crate::{
    id::{MaterialId, UnitId},
    node::{Material, OperatingUnit},
    set::{MaterialSet, UnitSet},
};
use rustc_hash::FxHashMap;

/// A fatal fault detected while assembling a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// A material id was referenced (partition, cap) but never registered.
    UnknownMaterial { material: MaterialId },
    /// A unit references an input or output material that was never
    /// registered.
    UnknownMaterialInUnit { unit: UnitId, material: MaterialId },
    /// A unit id was referenced (mutual-exclusion group) but never
    /// registered.
    UnknownUnit { unit: UnitId },
    /// The same material was registered twice.
    DuplicateMaterial { material: MaterialId },
    /// The same unit was registered twice.
    DuplicateUnit { unit: UnitId },
    /// A material was declared both raw material and product.
    PartitionOverlap { material: MaterialId },
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::UnknownMaterial { material } => {
                write!(f, "unknown material {}", material)
            }
            ProblemError::UnknownMaterialInUnit { unit, material } => {
                write!(f, "unit {} references unknown material {}", unit, material)
            }
            ProblemError::UnknownUnit { unit } => write!(f, "unknown operating unit {}", unit),
            ProblemError::DuplicateMaterial { material } => {
                write!(f, "material {} registered twice", material)
            }
            ProblemError::DuplicateUnit { unit } => {
                write!(f, "operating unit {} registered twice", unit)
            }
            ProblemError::PartitionOverlap { material } => {
                write!(
                    f,
                    "material {} declared both raw material and product",
                    material
                )
            }
        }
    }
}

impl std::error::Error for ProblemError {}

/// Mutable builder collecting the nodes and constraints of a problem.
#[derive(Debug, Clone, Default)]
pub struct ProblemBuilder {
    materials: Vec<Material>,
    units: Vec<OperatingUnit>,
    raw_materials: MaterialSet,
    products: MaterialSet,
    mutually_exclusive_sets: Vec<UnitSet>,
    max_parallel_production: FxHashMap<MaterialId, u32>,
}

impl ProblemBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a material and returns its identifier.
    #[inline]
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = material.id();
        self.materials.push(material);
        id
    }

    /// Registers an operating unit and returns its identifier.
    #[inline]
    pub fn add_unit(&mut self, unit: OperatingUnit) -> UnitId {
        let id = unit.id();
        self.units.push(unit);
        id
    }

    /// Declares a material a raw material.
    #[inline]
    pub fn make_raw_material(&mut self, material: MaterialId) -> &mut Self {
        self.raw_materials.insert(material);
        self
    }

    /// Declares a material a product.
    #[inline]
    pub fn make_product(&mut self, material: MaterialId) -> &mut Self {
        self.products.insert(material);
        self
    }

    /// Adds a mutual-exclusion group: at most one member of the group may
    /// appear in any feasible solution.
    #[inline]
    pub fn add_mutually_exclusive_set(&mut self, units: UnitSet) -> &mut Self {
        self.mutually_exclusive_sets.push(units);
        self
    }

    /// Caps how many included units may simultaneously produce `material`.
    /// Materials without a cap are unlimited.
    #[inline]
    pub fn set_max_parallel_production(&mut self, material: MaterialId, cap: u32) -> &mut Self {
        self.max_parallel_production.insert(material, cap);
        self
    }

    /// Validates the collected structure and derives the solver indices.
    ///
    /// This is the single finalize step: every material referenced anywhere
    /// must be registered, the raw-material and product declarations must
    /// not overlap, and every derived map receives an entry for every node
    /// so the solver never observes a missing default.
    pub fn build(self) -> Result<Problem, ProblemError> {
        let mut materials: FxHashMap<MaterialId, Material> = FxHashMap::default();
        for material in self.materials {
            let id = material.id();
            if materials.insert(id, material).is_some() {
                return Err(ProblemError::DuplicateMaterial { material: id });
            }
        }

        let mut units: FxHashMap<UnitId, OperatingUnit> = FxHashMap::default();
        for unit in self.units {
            let id = unit.id();
            if units.insert(id, unit).is_some() {
                return Err(ProblemError::DuplicateUnit { unit: id });
            }
        }

        let material_ids: MaterialSet = materials.keys().copied().collect();
        let unit_ids: UnitSet = units.keys().copied().collect();

        for material in self.raw_materials.iter().chain(self.products.iter()) {
            if !material_ids.contains(material) {
                return Err(ProblemError::UnknownMaterial { material });
            }
        }
        for material in self.max_parallel_production.keys() {
            if !material_ids.contains(*material) {
                return Err(ProblemError::UnknownMaterial {
                    material: *material,
                });
            }
        }
        if let Some(material) = self
            .raw_materials
            .intersect(&self.products)
            .ordered()
            .first()
        {
            return Err(ProblemError::PartitionOverlap {
                material: *material,
            });
        }

        // Producer/consumer indices, one entry per material.
        let mut producers: FxHashMap<MaterialId, UnitSet> = material_ids
            .iter()
            .map(|material| (material, UnitSet::new()))
            .collect();
        let mut consumers = producers.clone();

        for unit in units.values() {
            for material in unit.inputs().iter() {
                let entry =
                    consumers
                        .get_mut(&material)
                        .ok_or(ProblemError::UnknownMaterialInUnit {
                            unit: unit.id(),
                            material,
                        })?;
                entry.insert(unit.id());
            }
            for material in unit.outputs().iter() {
                let entry =
                    producers
                        .get_mut(&material)
                        .ok_or(ProblemError::UnknownMaterialInUnit {
                            unit: unit.id(),
                            material,
                        })?;
                entry.insert(unit.id());
            }
        }

        // Symmetric mutual-exclusion closure, one entry per unit.
        let mut mutually_exclusive_partners: FxHashMap<UnitId, UnitSet> =
            unit_ids.iter().map(|unit| (unit, UnitSet::new())).collect();

        for group in &self.mutually_exclusive_sets {
            for member in group.iter() {
                if !unit_ids.contains(member) {
                    return Err(ProblemError::UnknownUnit { unit: member });
                }
            }
            for member in group.iter() {
                let partners = mutually_exclusive_partners
                    .get_mut(&member)
                    .expect("every group member was just checked to be registered");
                partners.union_with(group);
                partners.remove(member);
            }
        }

        let intermediates = material_ids
            .except(&self.raw_materials)
            .except(&self.products);

        Ok(Problem {
            materials,
            units,
            material_ids,
            unit_ids,
            raw_materials: self.raw_materials,
            intermediates,
            products: self.products,
            mutually_exclusive_sets: self.mutually_exclusive_sets,
            max_parallel_production: self.max_parallel_production,
            producers,
            consumers,
            mutually_exclusive_partners,
        })
    }
}

/// An immutable, fully derived PNS problem.
///
/// All derived indices are precomputed by [`ProblemBuilder::build`]; the
/// accessors below are lookups only and safe to call from any number of
/// worker threads.
#[derive(Debug, Clone)]
pub struct Problem {
    materials: FxHashMap<MaterialId, Material>,
    units: FxHashMap<UnitId, OperatingUnit>,
    material_ids: MaterialSet,
    unit_ids: UnitSet,
    raw_materials: MaterialSet,
    intermediates: MaterialSet,
    products: MaterialSet,
    mutually_exclusive_sets: Vec<UnitSet>,
    max_parallel_production: FxHashMap<MaterialId, u32>,
    producers: FxHashMap<MaterialId, UnitSet>,
    consumers: FxHashMap<MaterialId, UnitSet>,
    mutually_exclusive_partners: FxHashMap<UnitId, UnitSet>,
}

impl Problem {
    /// Returns the canonical set of material identifiers.
    #[inline]
    pub fn materials(&self) -> &MaterialSet {
        &self.material_ids
    }

    /// Returns the canonical set of operating-unit identifiers.
    #[inline]
    pub fn operating_units(&self) -> &UnitSet {
        &self.unit_ids
    }

    /// Returns the number of materials.
    #[inline]
    pub fn num_materials(&self) -> usize {
        self.materials.len()
    }

    /// Returns the number of operating units.
    #[inline]
    pub fn num_units(&self) -> usize {
        self.units.len()
    }

    /// Returns the material node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not part of this problem.
    #[inline]
    pub fn material(&self, id: MaterialId) -> &Material {
        self.materials
            .get(&id)
            .unwrap_or_else(|| panic!("called `Problem::material` with unknown id {}", id))
    }

    /// Returns the material node for `id`, if registered.
    #[inline]
    pub fn get_material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(&id)
    }

    /// Returns the operating unit for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not part of this problem.
    #[inline]
    pub fn unit(&self, id: UnitId) -> &OperatingUnit {
        self.units
            .get(&id)
            .unwrap_or_else(|| panic!("called `Problem::unit` with unknown id {}", id))
    }

    /// Returns the operating unit for `id`, if registered.
    #[inline]
    pub fn get_unit(&self, id: UnitId) -> Option<&OperatingUnit> {
        self.units.get(&id)
    }

    /// Returns the material with the given name, smallest id first when
    /// names collide. Names are labels, not identities.
    pub fn material_by_name(&self, name: &str) -> Option<&Material> {
        self.material_ids
            .ordered()
            .into_iter()
            .map(|id| &self.materials[&id])
            .find(|material| material.name() == name)
    }

    /// Returns the operating unit with the given name, smallest id first
    /// when names collide.
    pub fn unit_by_name(&self, name: &str) -> Option<&OperatingUnit> {
        self.unit_ids
            .ordered()
            .into_iter()
            .map(|id| &self.units[&id])
            .find(|unit| unit.name() == name)
    }

    /// Returns the raw materials.
    #[inline]
    pub fn raw_materials(&self) -> &MaterialSet {
        &self.raw_materials
    }

    /// Returns the intermediates (materials that are neither raw nor
    /// product).
    #[inline]
    pub fn intermediates(&self) -> &MaterialSet {
        &self.intermediates
    }

    /// Returns the products.
    #[inline]
    pub fn products(&self) -> &MaterialSet {
        &self.products
    }

    /// Returns the declared mutual-exclusion groups.
    #[inline]
    pub fn mutually_exclusive_sets(&self) -> &[UnitSet] {
        &self.mutually_exclusive_sets
    }

    /// Returns the units producing `material`.
    ///
    /// # Panics
    ///
    /// Panics if `material` is not part of this problem.
    #[inline]
    pub fn producers_of(&self, material: MaterialId) -> &UnitSet {
        self.producers
            .get(&material)
            .unwrap_or_else(|| panic!("called `Problem::producers_of` with unknown id {}", material))
    }

    /// Returns the units consuming `material`.
    ///
    /// # Panics
    ///
    /// Panics if `material` is not part of this problem.
    #[inline]
    pub fn consumers_of(&self, material: MaterialId) -> &UnitSet {
        self.consumers
            .get(&material)
            .unwrap_or_else(|| panic!("called `Problem::consumers_of` with unknown id {}", material))
    }

    /// Returns the units mutually exclusive with `unit` (symmetric closure
    /// over all groups containing it).
    ///
    /// # Panics
    ///
    /// Panics if `unit` is not part of this problem.
    #[inline]
    pub fn mutually_exclusive_with(&self, unit: UnitId) -> &UnitSet {
        self.mutually_exclusive_partners.get(&unit).unwrap_or_else(|| {
            panic!(
                "called `Problem::mutually_exclusive_with` with unknown id {}",
                unit
            )
        })
    }

    /// Returns the parallel-production cap of `material`, `None` meaning
    /// unlimited.
    #[inline]
    pub fn max_parallel_production_of(&self, material: MaterialId) -> Option<u32> {
        self.max_parallel_production.get(&material).copied()
    }

    /// Iterates over the capped materials and their caps, in unspecified
    /// order.
    #[inline]
    pub fn parallel_production_caps(&self) -> impl Iterator<Item = (MaterialId, u32)> + '_ {
        self.max_parallel_production
            .iter()
            .map(|(material, cap)| (*material, *cap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Material, OperatingUnit};

    struct Fixture {
        water: MaterialId,
        steam: MaterialId,
        power: MaterialId,
        boiler: UnitId,
        turbine: UnitId,
        builder: ProblemBuilder,
    }

    fn fixture() -> Fixture {
        let mut builder = ProblemBuilder::new();
        let water = builder.add_material(Material::new("water"));
        let steam = builder.add_material(Material::new("steam"));
        let power = builder.add_material(Material::new("power"));

        let boiler = builder.add_unit(OperatingUnit::new(
            "boiler",
            [water].into_iter().collect(),
            [steam].into_iter().collect(),
        ));
        let turbine = builder.add_unit(OperatingUnit::new(
            "turbine",
            [steam].into_iter().collect(),
            [power].into_iter().collect(),
        ));

        builder.make_raw_material(water);
        builder.make_product(power);

        Fixture {
            water,
            steam,
            power,
            boiler,
            turbine,
            builder,
        }
    }

    #[test]
    fn test_build_derives_partition() {
        let f = fixture();
        let problem = f.builder.build().expect("valid problem");

        assert_eq!(problem.num_materials(), 3);
        assert_eq!(problem.num_units(), 2);
        assert!(problem.raw_materials().contains(f.water));
        assert!(problem.products().contains(f.power));
        assert!(problem.intermediates().contains(f.steam));
        assert_eq!(problem.intermediates().len(), 1);
    }

    #[test]
    fn test_build_derives_producers_and_consumers() {
        let f = fixture();
        let problem = f.builder.build().expect("valid problem");

        assert!(problem.producers_of(f.steam).contains(f.boiler));
        assert!(problem.consumers_of(f.steam).contains(f.turbine));
        assert!(problem.producers_of(f.water).is_empty());
        assert!(problem.consumers_of(f.power).is_empty());
    }

    #[test]
    fn test_mutual_exclusion_closure_is_symmetric() {
        let mut f = fixture();
        f.builder
            .add_mutually_exclusive_set([f.boiler, f.turbine].into_iter().collect());
        let problem = f.builder.build().expect("valid problem");

        assert!(problem.mutually_exclusive_with(f.boiler).contains(f.turbine));
        assert!(problem.mutually_exclusive_with(f.turbine).contains(f.boiler));
        assert!(!problem.mutually_exclusive_with(f.boiler).contains(f.boiler));
    }

    #[test]
    fn test_parallel_production_cap_defaults_to_unlimited() {
        let mut f = fixture();
        f.builder.set_max_parallel_production(f.steam, 1);
        let problem = f.builder.build().expect("valid problem");

        assert_eq!(problem.max_parallel_production_of(f.steam), Some(1));
        assert_eq!(problem.max_parallel_production_of(f.power), None);
    }

    #[test]
    fn test_unknown_material_in_unit_is_rejected() {
        let mut builder = ProblemBuilder::new();
        let phantom = Material::new("never registered");
        builder.add_unit(OperatingUnit::new(
            "broken",
            [phantom.id()].into_iter().collect(),
            MaterialSet::new(),
        ));

        match builder.build() {
            Err(ProblemError::UnknownMaterialInUnit { material, .. }) => {
                assert_eq!(material, phantom.id());
            }
            other => panic!("expected UnknownMaterialInUnit, got {:?}", other),
        }
    }

    #[test]
    fn test_partition_overlap_is_rejected() {
        let mut builder = ProblemBuilder::new();
        let m = builder.add_material(Material::new("m"));
        builder.make_raw_material(m);
        builder.make_product(m);

        match builder.build() {
            Err(ProblemError::PartitionOverlap { material }) => assert_eq!(material, m),
            other => panic!("expected PartitionOverlap, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_unit_in_mutex_group_is_rejected() {
        let mut f = fixture();
        let stranger = OperatingUnit::new("stranger", MaterialSet::new(), MaterialSet::new());
        f.builder
            .add_mutually_exclusive_set([f.boiler, stranger.id()].into_iter().collect());

        match f.builder.build() {
            Err(ProblemError::UnknownUnit { unit }) => assert_eq!(unit, stranger.id()),
            other => panic!("expected UnknownUnit, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let f = fixture();
        let problem = f.builder.build().expect("valid problem");

        assert_eq!(problem.material_by_name("steam").unwrap().id(), f.steam);
        assert_eq!(problem.unit_by_name("boiler").unwrap().id(), f.boiler);
        assert!(problem.material_by_name("unobtainium").is_none());
    }
}
