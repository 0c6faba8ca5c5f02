//! Module reference collection using the oxc AST visitor

use oxc_ast::ast::*;
use oxc_ast_visit::{walk, Visit};

/// Collects module references from a parsed program, in source order.
///
/// Recognised forms:
/// - `import ... from "m"`, `import "m"`, `export ... from "m"`, `export * from "m"`
/// - `import("m")` with a string literal
/// - `require("m")` with a string literal, at any nesting level
/// - AMD `define([deps], factory)`, `define("id", [deps], factory)` and `require([deps], cb)`
#[derive(Debug, Default)]
pub struct ReferenceCollector {
    references: Vec<String>,
}

impl ReferenceCollector {
    /// Walk `program` and return every reference found
    pub fn collect(program: &Program<'_>) -> Vec<String> {
        let mut collector = Self::default();
        collector.visit_program(program);
        collector.references
    }

    fn push(&mut self, module: &str) {
        self.references.push(module.to_string());
    }

    fn push_dependency_array(&mut self, array: &ArrayExpression<'_>) {
        for element in &array.elements {
            if let ArrayExpressionElement::StringLiteral(lit) = element {
                self.push(lit.value.as_str());
            }
        }
    }

    fn visit_require_call(&mut self, call: &CallExpression<'_>) {
        match call.arguments.first() {
            Some(Argument::StringLiteral(lit)) => self.push(lit.value.as_str()),
            // AMD: require(['a', 'b'], function (a, b) { ... })
            Some(Argument::ArrayExpression(array)) => self.push_dependency_array(array),
            _ => {}
        }
    }

    fn visit_define_call(&mut self, call: &CallExpression<'_>) {
        // define([deps], factory) or define('id', [deps], factory); the id is not a dependency
        let deps = call.arguments.iter().take(2).find_map(|arg| match arg {
            Argument::ArrayExpression(array) => Some(array),
            _ => None,
        });

        if let Some(array) = deps {
            self.push_dependency_array(array);
        }
    }
}

impl<'a> Visit<'a> for ReferenceCollector {
    fn visit_import_declaration(&mut self, decl: &ImportDeclaration<'a>) {
        self.push(decl.source.value.as_str());
        walk::walk_import_declaration(self, decl);
    }

    fn visit_export_named_declaration(&mut self, decl: &ExportNamedDeclaration<'a>) {
        if let Some(source) = &decl.source {
            self.push(source.value.as_str());
        }
        walk::walk_export_named_declaration(self, decl);
    }

    fn visit_export_all_declaration(&mut self, decl: &ExportAllDeclaration<'a>) {
        self.push(decl.source.value.as_str());
        walk::walk_export_all_declaration(self, decl);
    }

    fn visit_import_expression(&mut self, expr: &ImportExpression<'a>) {
        if let Expression::StringLiteral(lit) = &expr.source {
            self.push(lit.value.as_str());
        }
        walk::walk_import_expression(self, expr);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if let Expression::Identifier(ident) = &call.callee {
            match ident.name.as_str() {
                "require" => self.visit_require_call(call),
                "define" => self.visit_define_call(call),
                _ => {}
            }
        }
        walk::walk_call_expression(self, call);
    }
}
