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

//! Shared test instance: seven operating units over eleven materials.
//!
//! Structure (raw materials are E, G, J, K, L; the product is A):
//!
//! ```text
//! O1: {B, C} -> {A}      O5: {F}    -> {C}
//! O2: {D}    -> {B, F}   O6: {J}    -> {D, H}
//! O3: {D, E} -> {B}      O7: {K, L} -> {D, H}
//! O4: {G, H} -> {C}
//! ```
//!
//! Mutually exclusive: {O6, O7} and {O1, O2, O5}. Material A is capped at
//! one parallel producer. The only solution structures are
//! {O1, O3, O4, O6} and {O1, O3, O4, O7}.

use crate::bound::UnitCostModel;
use pns_model::{
    id::{MaterialId, UnitId},
    node::{Material, OperatingUnit},
    problem::{Problem, ProblemBuilder},
    set::MaterialSet,
};

pub(crate) struct SevenUnitFixture {
    pub problem: Problem,
    /// The same network with material D additionally capped at one
    /// parallel producer.
    pub capped_d_problem: Problem,
    pub a: MaterialId,
    pub b: MaterialId,
    pub c: MaterialId,
    pub d: MaterialId,
    pub e: MaterialId,
    pub f: MaterialId,
    pub g: MaterialId,
    pub h: MaterialId,
    pub j: MaterialId,
    pub k: MaterialId,
    pub l: MaterialId,
    pub o1: UnitId,
    pub o2: UnitId,
    pub o3: UnitId,
    pub o4: UnitId,
    pub o5: UnitId,
    pub o6: UnitId,
    pub o7: UnitId,
}

impl SevenUnitFixture {
    /// Unit costs 34/76/12/87/25/74/52 for O1..O7; the two solution
    /// structures then cost 207 (via O6) and 185 (via O7).
    pub fn unit_costs(&self) -> UnitCostModel<i64> {
        let mut costs = UnitCostModel::new();
        costs.set_cost(self.o1, 34);
        costs.set_cost(self.o2, 76);
        costs.set_cost(self.o3, 12);
        costs.set_cost(self.o4, 87);
        costs.set_cost(self.o5, 25);
        costs.set_cost(self.o6, 74);
        costs.set_cost(self.o7, 52);
        costs
    }
}

fn materials(ids: &[MaterialId]) -> MaterialSet {
    ids.iter().copied().collect()
}

pub(crate) fn seven_unit_problem() -> SevenUnitFixture {
    let nodes: Vec<Material> = ["A", "B", "C", "D", "E", "F", "G", "H", "J", "K", "L"]
        .iter()
        .map(|name| Material::new(*name))
        .collect();
    let [a, b, c, d, e, f, g, h, j, k, l]: [MaterialId; 11] = nodes
        .iter()
        .map(Material::id)
        .collect::<Vec<_>>()
        .try_into()
        .unwrap();

    let units = vec![
        OperatingUnit::new("O1", materials(&[b, c]), materials(&[a])),
        OperatingUnit::new("O2", materials(&[d]), materials(&[b, f])),
        OperatingUnit::new("O3", materials(&[d, e]), materials(&[b])),
        OperatingUnit::new("O4", materials(&[g, h]), materials(&[c])),
        OperatingUnit::new("O5", materials(&[f]), materials(&[c])),
        OperatingUnit::new("O6", materials(&[j]), materials(&[d, h])),
        OperatingUnit::new("O7", materials(&[k, l]), materials(&[d, h])),
    ];
    let [o1, o2, o3, o4, o5, o6, o7]: [UnitId; 7] = units
        .iter()
        .map(OperatingUnit::id)
        .collect::<Vec<_>>()
        .try_into()
        .unwrap();

    let build = |extra_cap: Option<(MaterialId, u32)>| -> Problem {
        let mut builder = ProblemBuilder::new();
        for node in &nodes {
            builder.add_material(node.clone());
        }
        for unit in &units {
            builder.add_unit(unit.clone());
        }
        for raw in [e, g, j, k, l] {
            builder.make_raw_material(raw);
        }
        builder.make_product(a);
        builder.add_mutually_exclusive_set([o6, o7].into_iter().collect());
        builder.add_mutually_exclusive_set([o1, o2, o5].into_iter().collect());
        builder.set_max_parallel_production(a, 1);
        if let Some((material, cap)) = extra_cap {
            builder.set_max_parallel_production(material, cap);
        }
        builder.build().expect("fixture problem is valid")
    };

    SevenUnitFixture {
        problem: build(None),
        capped_d_problem: build(Some((d, 1))),
        a,
        b,
        c,
        d,
        e,
        f,
        g,
        h,
        j,
        k,
        l,
        o1,
        o2,
        o3,
        o4,
        o5,
        o6,
        o7,
    }
}

/// A product that nothing can produce: O1 consumes the only raw material
/// and produces an intermediate no unit turns into the product.
pub(crate) fn unproducible_product_problem() -> Problem {
    let mut builder = ProblemBuilder::new();
    let raw = builder.add_material(Material::new("raw"));
    let middle = builder.add_material(Material::new("middle"));
    let goal = builder.add_material(Material::new("goal"));
    builder.add_unit(OperatingUnit::new(
        "O1",
        materials(&[raw]),
        materials(&[middle]),
    ));
    builder.make_raw_material(raw);
    builder.make_product(goal);
    builder.build().expect("fixture problem is valid")
}
