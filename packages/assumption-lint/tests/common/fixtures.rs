//! Test fixtures
//!
//! Ready-made program models for the checker's documented behaviors.

use assumption_lint::{AssumptionLabel, AssumptionTerm, ProgramModel};

use super::builders::{func, ProgramBuilder};

pub fn lit(name: &str) -> AssumptionTerm {
    AssumptionTerm::literal(AssumptionLabel::new(name).expect("valid label"))
}

pub fn neg(name: &str) -> AssumptionTerm {
    lit(name).negate()
}

/// f{x} calls g{no-x} at line 5
pub fn fixture_direct_conflict() -> ProgramModel {
    ProgramBuilder::new()
        .function(func("f").assumes("x").call("g", 5))
        .function(func("g").assumes("no-x"))
        .build()
}

/// f and g declare nothing
pub fn fixture_no_assumptions() -> ProgramModel {
    ProgramBuilder::new()
        .function(func("f").call("g", 5))
        .function(func("g"))
        .build()
}

/// f{x, y} → g{z} → h{no-z}
pub fn fixture_disjoint_chain() -> ProgramModel {
    ProgramBuilder::new()
        .function(func("f").assumes("x, y").call("g", 4))
        .function(func("g").assumes("z").call("h", 6))
        .function(func("h").assumes("no-z"))
        .build()
}

/// f{} with `# assume: no-x` at `comment_line`, calling g{x} at line 5
pub fn fixture_comment_scope(comment_line: u32) -> ProgramModel {
    ProgramBuilder::new()
        .function(
            func("f")
                .comment_assumes(comment_line, "no-x")
                .call("g", 5),
        )
        .function(func("g").assumes("x"))
        .build()
}

/// Ring of `n` functions f0 → f1 → … → f0, each with its own label
pub fn fixture_call_ring(n: usize) -> ProgramModel {
    (0..n)
        .fold(ProgramBuilder::new(), |builder, i| {
            builder.function(
                func(&format!("f{i}"))
                    .assumes(&format!("a{i}"))
                    .call(&format!("f{}", (i + 1) % n), 3),
            )
        })
        .build()
}

/// `width` callers of a shared `leaf{no-x}`; odd ones assume x
pub fn fixture_fan_in(width: usize) -> ProgramModel {
    (0..width)
        .fold(ProgramBuilder::new(), |builder, i| {
            let caller = func(&format!("c{i}")).call("leaf", 2);
            let caller = if i % 2 == 1 { caller.assumes("x") } else { caller };
            builder.function(caller)
        })
        .function(func("leaf").assumes("no-x"))
        .build()
}

/// Program model in the host's JSON exchange form
pub fn fixture_json_model() -> &'static str {
    r#"{
  "functions": [
    {
      "qualified_name": "shop.checkout",
      "name": "checkout",
      "doc": "Charge the cart.\n\nassume: no-empty_cart,\n  logged_in\n",
      "start_line": 10,
      "source_lines": [
        "def checkout(cart):",
        "    \"\"\"...\"\"\"",
        "    refund(cart)",
        "    # assume: no-authenticated",
        "    charge(cart)"
      ],
      "comment_lines": [13],
      "body": {
        "kind": "sequence",
        "body": [
          { "kind": "single", "value": { "kind": "call", "callee": "refund", "line": 12 } },
          { "kind": "single", "value": { "kind": "call", "callee": "charge", "line": 14 } }
        ]
      }
    },
    {
      "qualified_name": "shop.charge",
      "name": "charge",
      "doc": "assume: authenticated",
      "body": { "kind": "leaf" }
    },
    {
      "qualified_name": "shop.refund",
      "name": "refund",
      "doc": "assume: empty_cart"
    }
  ]
}"#
}
