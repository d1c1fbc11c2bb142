//! List demonstration tasks
//!
//! This module provides the `walkthrough`, `render` and `lookup` subcommands.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use polylist::prelude::*;
use serde::Serialize;

/// Output format for the render subcommand
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `1 -> 2 -> 3`
    #[default]
    Text,
    /// JSON document with the rendering, size and elements
    Json,
}

/// Arguments for the render subcommand
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Values appended in order
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Value placed in front of the list after appending
    #[arg(long, allow_negative_numbers = true)]
    pub prepend: Option<i64>,

    /// Values of a second list concatenated onto the first
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    pub concat: Vec<i64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Arguments for the lookup subcommand
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Values appended in order
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Zero-based index to fetch
    #[arg(
        long,
        allow_negative_numbers = true,
        conflicts_with = "element",
        required_unless_present = "element"
    )]
    pub index: Option<isize>,

    /// Element whose first position is reported
    #[arg(long, allow_negative_numbers = true)]
    pub element: Option<i64>,
}

/// JSON shape printed by `render --format json`
#[derive(Debug, Serialize)]
struct Report<'a> {
    rendered: String,
    size: usize,
    elements: &'a PolymorphicList<i64>,
}

/// Builds a list by appending `values` one by one to an empty list.
fn build_list(values: &[i64]) -> PolymorphicList<i64> {
    values
        .iter()
        .fold(PolymorphicList::new(), |list, value| list.append(*value).into())
}

fn render_list(list: &PolymorphicList<i64>, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(list.to_string()),
        Format::Json => {
            let report = Report {
                rendered: list.to_string(),
                size: list.size(),
                elements: list,
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize list report")
        }
    }
}

/// Runs the append / prepend / lookup / concat sequence on a small list.
pub fn walkthrough() -> Result<()> {
    let list = EmptyNode::new().append(1);
    tracing::info!(size = list.size(), "append(1) on the empty node");
    println!("{list}");

    let list = list.append(2);
    tracing::info!(size = list.size(), "append(2)");
    println!("{list}");

    let list = list.prepend(0);
    tracing::info!(size = list.size(), "prepend(0)");
    println!("{list}");

    let node = list.get(1)?;
    tracing::info!(element = *node.data(), "get(1)");
    println!("get(1) -> {}", node.data());

    let position = list.index_of(&2)?;
    tracing::info!(position, "index_of(2)");
    println!("index_of(2) -> {position}");

    let copy = list.copy().append(3);
    tracing::debug!(copy_size = copy.size(), original_size = list.size(), "grew a copy");
    println!("copy after append(3): {copy}; original: {list}");

    let joined = EmptyNode::new().concat(&ListNode::singleton(1));
    tracing::info!(size = joined.size(), "concat onto the empty node");
    println!("empty + [1] -> {joined}");

    let empty = EmptyNode::new();
    if let Err(error) = <EmptyNode as Sequence<i64>>::get_last(&empty) {
        tracing::warn!(%error, "get_last on the empty node");
        println!("get_last on empty -> error: {error}");
    }

    Ok(())
}

/// Builds a list from the arguments and prints it.
pub fn render(args: &RenderArgs) -> Result<()> {
    let mut list = build_list(&args.values);
    tracing::debug!(size = list.size(), "built list from values");

    if let Some(value) = args.prepend {
        list = list.prepend(value).into();
        tracing::debug!(value, "prepended value");
    }

    if !args.concat.is_empty() {
        let other = build_list(&args.concat);
        list = list.concat(&other);
        tracing::debug!(added = other.size(), size = list.size(), "concatenated second list");
    }

    println!("{}", render_list(&list, args.format)?);
    Ok(())
}

/// Looks up an index or an element and prints the outcome.
pub fn lookup(args: &LookupArgs) -> Result<()> {
    let list = build_list(&args.values);
    tracing::debug!(%list, "built list from values");

    if let Some(index) = args.index {
        let node = list
            .get(index)
            .with_context(|| format!("Failed to get index {index}"))?;
        println!("{}", node.data());
    } else if let Some(element) = args.element {
        let position = list
            .index_of(&element)
            .with_context(|| format!("Failed to find element {element}"))?;
        println!("{position}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], "")]
    #[case(&[1], "1")]
    #[case(&[1, -2, 3], "1 -> -2 -> 3")]
    fn test_build_list_appends_in_order(#[case] values: &[i64], #[case] expected: &str) {
        let list = build_list(values);
        assert_eq!(list.to_string(), expected);
        assert_eq!(list.size(), values.len());
    }

    #[rstest]
    fn test_render_json_report() {
        let list = build_list(&[1, 2]);
        let json = render_list(&list, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rendered"], "1 -> 2");
        assert_eq!(value["size"], 2);
        assert_eq!(value["elements"], serde_json::json!([1, 2]));
    }

    #[rstest]
    fn test_lookup_reports_out_of_range() {
        let args = LookupArgs {
            values: vec![1, 2],
            index: Some(5),
            element: None,
        };
        let error = lookup(&args).unwrap_err();
        assert_eq!(
            error.downcast_ref::<ListError>(),
            Some(&ListError::OutOfRange { index: 5, size: 2 })
        );
    }

    #[rstest]
    fn test_walkthrough_succeeds() {
        assert!(walkthrough().is_ok());
    }
}
