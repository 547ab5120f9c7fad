//! The mutation rule registry.
//!
//! Maps every recognized `.clang-format` setting to the [`Rule`] that
//! mutates it. The table is a `const` slice sorted by name and searched with
//! binary search; there is no runtime registration.
//!
//! Settings not in the table fall back to a fixed policy: booleans are
//! negated, anything else is left unchanged and reported with a
//! `tracing` warning.

use super::error::MutationError;
use super::mutation::mutate_document;
use super::mutators::{BoundedDelta, Choice, UniformRange, ValueMutator};
use super::types::Value;
use rand::Rng;

/// How a single setting is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Uniform pick from an enumerated set of style names.
    Choice(Choice),
    /// Integer jitter floored at a minimum.
    Delta(BoundedDelta),
    /// Uniform integer from a half-open interval.
    Range(UniformRange),
    /// Never mutated (regexes, pragmas, macro lists).
    Keep,
    /// Always replaced by a fixed boolean.
    ForceBool(bool),
    /// A nested document, mutated field by field at the same rate.
    Nested,
    /// A sequence of nested documents, each mutated at the same rate.
    NestedSeq,
}

impl Rule {
    /// Produces a replacement for `value` under this rule.
    ///
    /// # Errors
    /// Returns [`MutationError::TypeMismatch`] if `value` does not have the
    /// shape the rule operates on.
    pub fn apply<R: Rng>(
        &self,
        field: &str,
        value: &Value,
        rate: f64,
        rng: &mut R,
    ) -> Result<Value, MutationError> {
        match self {
            Rule::Choice(choice) => choice.mutate(field, value, rng),
            Rule::Delta(delta) => delta.mutate(field, value, rng),
            Rule::Range(range) => range.mutate(field, value, rng),
            Rule::Keep => Ok(value.clone()),
            Rule::ForceBool(b) => Ok(Value::Bool(*b)),
            Rule::Nested => match value {
                Value::Map(doc) => Ok(Value::Map(mutate_document(doc, rate, rng)?)),
                other => Err(MutationError::type_mismatch(field, "map", other.kind())),
            },
            Rule::NestedSeq => match value {
                Value::Seq(items) => items
                    .iter()
                    .map(|item| match item {
                        Value::Map(doc) => mutate_document(doc, rate, rng).map(Value::Map),
                        other => Err(MutationError::type_mismatch(
                            field,
                            "sequence of maps",
                            other.kind(),
                        )),
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Seq),
                other => Err(MutationError::type_mismatch(
                    field,
                    "sequence of maps",
                    other.kind(),
                )),
            },
        }
    }
}

const fn choice(choices: &'static [&'static str]) -> Rule {
    Rule::Choice(Choice::new(choices))
}

const fn delta(factor: u32) -> Rule {
    Rule::Delta(BoundedDelta::new(factor))
}

const fn delta_min(factor: u32, minimum: i64) -> Rule {
    Rule::Delta(BoundedDelta::with_minimum(factor, minimum))
}

const fn range(start: i64, stop: i64) -> Rule {
    Rule::Range(UniformRange::new(start, stop))
}

const ALIGN_CONSECUTIVE: &[&str] = &[
    "None",
    "Consecutive",
    "AcrossEmptyLines",
    "AcrossComments",
    "AcrossEmptyLinesAndComments",
];

const SHORT_FUNCTION: &[&str] = &["None", "Empty", "Inline", "All"];

const EMPTY_LINE: &[&str] = &["Never", "Leave", "Always"];

/// Every recognized setting, sorted by name.
pub const RULES: &[(&str, Rule)] = &[
    ("AccessModifierOffset", range(-8, 9)),
    ("AlignAfterOpenBracket", choice(&["Align", "DontAlign", "AlwaysBreak"])),
    ("AlignArrayOfStructures", choice(&["None", "Left", "Right"])),
    ("AlignConsecutiveAssignments", choice(ALIGN_CONSECUTIVE)),
    ("AlignConsecutiveBitFields", choice(ALIGN_CONSECUTIVE)),
    ("AlignConsecutiveDeclarations", choice(ALIGN_CONSECUTIVE)),
    ("AlignConsecutiveMacros", choice(ALIGN_CONSECUTIVE)),
    ("AlignEscapedNewlines", choice(&["DontAlign", "Left", "Right"])),
    ("AlignOperands", choice(&["DontAlign", "Align", "AlignAfterOperator"])),
    ("AllowShortBlocksOnASingleLine", choice(&["Never", "Empty", "Always"])),
    ("AllowShortFunctionsOnASingleLine", choice(SHORT_FUNCTION)),
    (
        "AllowShortIfStatementsOnASingleLine",
        choice(&["Never", "WithoutElse", "OnlyFirstIf", "AllIfsAndElse"]),
    ),
    ("AllowShortLambdasOnASingleLine", choice(SHORT_FUNCTION)),
    ("AlwaysBreakAfterDefinitionReturnType", choice(&["None", "All", "TopLevel"])),
    (
        "AlwaysBreakAfterReturnType",
        choice(&["None", "All", "TopLevel", "AllDefinitions", "TopLevelDefinitions"]),
    ),
    (
        "BasedOnStyle",
        choice(&["LLVM", "Google", "Chromium", "Mozilla", "WebKit", "Microsoft", "GNU"]),
    ),
    ("BitFieldColonSpacing", choice(&["Both", "None", "Before", "After"])),
    ("BraceWrapping", Rule::Nested),
    ("BreakBeforeBinaryOperators", choice(&["None", "NonAssignment", "All"])),
    (
        "BreakBeforeBraces",
        choice(&["Attach", "Linux", "Mozilla", "Stroustrup", "Allman", "GNU", "WebKit", "Custom"]),
    ),
    ("BreakConstructorInitializers", choice(&["BeforeColon", "BeforeComma", "AfterColon"])),
    ("BreakInheritanceList", choice(&["BeforeColon", "BeforeComma", "AfterColon", "AfterComma"])),
    ("ColumnLimit", delta_min(5, 1)),
    ("CommentPragmas", Rule::Keep),
    ("ConstructorInitializerIndentWidth", delta(4)),
    ("ContinuationIndentWidth", delta(3)),
    ("DisableFormat", Rule::ForceBool(false)),
    ("EmptyLineAfterAccessModifier", choice(EMPTY_LINE)),
    ("EmptyLineBeforeAccessModifier", choice(EMPTY_LINE)),
    ("ForEachMacros", Rule::Keep),
    ("IncludeBlocks", choice(&["Preserve", "Merge", "Regroup"])),
    ("IncludeCategories", Rule::NestedSeq),
    ("IncludeIsMainRegex", Rule::Keep),
    ("IndentExternBlock", choice(&["AfterExternBlock", "NoIndent", "Indent"])),
    ("IndentPPDirectives", choice(&["None", "AfterHash", "BeforeHash"])),
    ("IndentWidth", delta(4)),
    ("InsertTrailingCommas", choice(&["None", "Wrapped"])),
    ("JavaScriptQuotes", choice(&["Leave", "Single", "Double"])),
    ("LambdaBodyIndentation", choice(&["Signature", "OuterScope"])),
    (
        "Language",
        choice(&[
            "None",
            "Cpp",
            "Java",
            "JavaScript",
            "Json",
            "ObjC",
            "Proto",
            "TableGen",
            "TextProto",
            "Verilog",
        ]),
    ),
    ("MacroBlockBegin", Rule::Keep),
    ("MacroBlockEnd", Rule::Keep),
    ("MaxEmptyLinesToKeep", delta(1)),
    ("NamespaceIndentation", choice(&["None", "Inner", "All"])),
    ("ObjCBlockIndentWidth", range(0, 8)),
    ("PackConstructorInitializers", choice(&["Never", "BinPack", "CurrentLine", "NextLine"])),
    ("PenaltyBreakAssignment", delta(2)),
    ("PenaltyBreakBeforeFirstCallParameter", delta(2)),
    ("PenaltyBreakComment", delta(10)),
    ("PenaltyBreakFirstLessLess", delta(10)),
    ("PenaltyBreakOpenParenthesis", delta(10)),
    ("PenaltyBreakString", delta(25)),
    ("PenaltyExcessCharacter", delta(1000)),
    ("PenaltyIndentedWhitespace", delta(25)),
    ("PenaltyReturnTypeOnItsOwnLine", delta(10)),
    ("PointerAlignment", choice(&["Left", "Right", "Middle"])),
    ("Priority", Rule::Keep),
    ("ReferenceAlignment", choice(&["Pointer", "Right", "Middle"])),
    ("Regex", Rule::Keep),
    (
        "RequiresClausePosition",
        choice(&["OwnLine", "WithPreceding", "WithFollowing", "SingleLine"]),
    ),
    ("SeparateDefinitionBlocks", choice(&["Leave", "Always", "Never"])),
    ("ShortNamespaceLines", range(0, 8)),
    ("SortIncludes", choice(&["Never", "CaseSensitive", "CaseInsensitive"])),
    ("SortJavaStaticImport", choice(&["Before", "After"])),
    ("SpaceAroundPointerQualifiers", choice(&["Default", "Before", "After", "Both"])),
    ("SpaceBeforeParens", choice(&["Never", "ControlStatements", "Always"])),
    ("SpacesBeforeTrailingComments", delta(3)),
    ("Standard", choice(&["Cpp03", "Cpp11", "Cpp14", "Cpp17", "Cpp20", "Latest", "Auto"])),
    ("TabWidth", delta(3)),
    ("UseTab", choice(&["Never", "ForIndentation", "Always"])),
];

/// Looks up the rule registered for `field`.
pub fn rule_for(field: &str) -> Option<Rule> {
    RULES
        .binary_search_by(|(name, _)| (*name).cmp(field))
        .ok()
        .map(|idx| RULES[idx].1)
}

/// Produces a replacement for one setting.
///
/// Registered settings go through their [`Rule`]. Unregistered booleans are
/// negated; any other unregistered value is returned unchanged and a warning
/// naming the setting and its value is emitted.
pub fn mutate_value<R: Rng>(
    field: &str,
    value: &Value,
    rate: f64,
    rng: &mut R,
) -> Result<Value, MutationError> {
    match rule_for(field) {
        Some(rule) => rule.apply(field, value, rate, rng),
        None => Ok(unrecognized(field, value)),
    }
}

fn unrecognized(field: &str, value: &Value) -> Value {
    match value {
        Value::Bool(b) => Value::Bool(!b),
        other => {
            tracing::warn!(
                setting = field,
                value = %other,
                "unrecognized setting in style configuration, leaving it unchanged"
            );
            other.clone()
        }
    }
}
