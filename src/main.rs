use clap::{Args, Parser, Subcommand};
use tracing::warn;

use reinvent_transforms::{
    TransformKind, catalog, emit, params::TransformParams, preview, transform::Transform,
};

#[derive(Parser, Debug)]
#[command(
    name = "reinvent-transforms",
    version,
    about = "Evaluate, preview and emit scoring transforms for REINVENT configs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transform raw scores into desirability values.
    Apply {
        #[command(flatten)]
        transform: TransformArgs,
        /// Comma-separated raw score values.
        #[arg(long, value_delimiter = ',', required_unless_present = "labels")]
        scores: Vec<f64>,
        /// Comma-separated category labels (value_mapping only).
        #[arg(long, value_delimiter = ',', conflicts_with = "scores")]
        labels: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Sample a transform curve over a range of x-values.
    Preview {
        #[command(flatten)]
        transform: TransformArgs,
        #[arg(long, default_value_t = 0.0)]
        min: f64,
        #[arg(long, default_value_t = 100.0)]
        max: f64,
        #[arg(long, default_value_t = preview::DEFAULT_POINTS)]
        points: usize,
        #[arg(long)]
        json: bool,
    },
    /// Print the transform's config section.
    Emit {
        #[command(flatten)]
        transform: TransformArgs,
        /// Output format: toml or json.
        #[arg(long, default_value = "toml")]
        format: String,
    },
    /// List the scoring-component catalog with transform defaults.
    Components,
}

#[derive(Args, Debug, Default)]
struct TransformArgs {
    /// Transform type; defaults to the component's catalog default.
    #[arg(long = "type")]
    kind: Option<TransformKind>,
    /// Scoring-component name, used for catalog defaults and the emitted
    /// component key.
    #[arg(long)]
    component: Option<String>,
    #[arg(long)]
    low: Option<f64>,
    #[arg(long)]
    high: Option<f64>,
    #[arg(long)]
    k: Option<f64>,
    #[arg(long)]
    k_common: Option<f64>,
    #[arg(long)]
    k_left: Option<f64>,
    #[arg(long)]
    k_right: Option<f64>,
    /// Mapping entry as `label=value`; repeatable (value_mapping only).
    #[arg(long = "map", value_parser = parse_map_entry)]
    map: Vec<(String, f64)>,
    #[arg(long)]
    no_match: Option<f64>,
}

impl TransformArgs {
    fn build(&self) -> Result<Transform, String> {
        let catalog_def = self
            .component
            .as_deref()
            .map(|name| {
                catalog::find(name).ok_or_else(|| format!("unknown scoring component: {name}"))
            })
            .transpose()?;

        let kind = match (self.kind, catalog_def) {
            (Some(kind), _) => kind,
            (None, Some(def)) => def.default_kind.ok_or_else(|| {
                format!(
                    "component {} takes no transform; pass --type explicitly",
                    def.name
                )
            })?,
            (None, None) => return Err("specify --type or --component".to_string()),
        };

        // Catalog defaults fill whatever the flags leave unset.
        let (default_low, default_high) = match catalog_def {
            Some(def) if def.default_kind == Some(kind) => (Some(def.low), Some(def.high)),
            _ => (None, None),
        };

        let mapping = if self.map.is_empty() {
            match (kind, catalog_def) {
                (TransformKind::ValueMapping, Some(def)) => {
                    match catalog::default_transform(def.name) {
                        Some(Transform::ValueMapping(m)) => Some(m.entries().to_vec()),
                        _ => None,
                    }
                }
                _ => None,
            }
        } else {
            Some(self.map.clone())
        };

        let params = TransformParams {
            low: self.low.or(default_low),
            high: self.high.or(default_high),
            k: self.k,
            k_common: self.k_common,
            k_left: self.k_left,
            k_right: self.k_right,
            mapping,
            no_match: self.no_match,
        };

        if let (Some(low), Some(high)) = (params.low, params.high) {
            if low > high {
                warn!(
                    "low ({low}) exceeds high ({high}); evaluating the inverted window literally"
                );
            }
        }

        params.resolve(kind).map_err(|e| e.to_string())
    }

    fn component_key(&self) -> &str {
        self.component
            .as_deref()
            .and_then(|name| catalog::find(name).map(|def| def.config_key))
            .unwrap_or("Component")
    }
}

fn parse_map_entry(s: &str) -> Result<(String, f64), String> {
    let (label, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected label=value, got: {s}"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid mapping value in: {s}"))?;
    Ok((label.trim().to_string(), value))
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Apply {
            transform,
            scores,
            labels,
            json,
        } => {
            let t = transform.build()?;
            let out = if labels.is_empty() {
                t.apply(&scores)
            } else {
                let Transform::ValueMapping(mapping) = &t else {
                    return Err("--labels requires a value_mapping transform".to_string());
                };
                mapping.apply(&labels)
            };
            if json {
                println!("{}", serde_json::json!({ "scores": out }));
            } else if labels.is_empty() {
                for (i, y) in out.iter().enumerate() {
                    println!("{i}\t{}\t{y}", scores[i]);
                }
            } else {
                for (i, y) in out.iter().enumerate() {
                    println!("{i}\t{}\t{y}", labels[i]);
                }
            }
        }
        Command::Preview {
            transform,
            min,
            max,
            points,
            json,
        } => {
            let t = transform.build()?;
            let curve = preview::sample(&t, min, max, points);
            if json {
                println!(
                    "{}",
                    serde_json::to_string(&curve).map_err(|e| e.to_string())?
                );
            } else {
                for p in curve {
                    println!("{}\t{}", p.x, p.y);
                }
            }
        }
        Command::Emit { transform, format } => {
            let t = transform.build()?;
            match format.as_str() {
                "toml" => print!("{}", emit::render_toml(&t, transform.component_key())),
                "json" => println!("{}", emit::render_json(&t)),
                other => return Err(format!("invalid --format (use toml|json): {other}")),
            }
        }
        Command::Components => {
            for def in catalog::COMPONENTS {
                match def.default_kind {
                    Some(kind) => println!(
                        "{}\t{}\t{}\tlow={}\thigh={}",
                        def.name,
                        def.config_key,
                        kind.config_name(),
                        def.low,
                        def.high
                    ),
                    None => println!("{}\t{}\t(none)", def.name, def.config_key),
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_map_entry() {
        assert_eq!(
            parse_map_entry("No MMP=0.1").unwrap(),
            ("No MMP".to_string(), 0.1)
        );
        assert!(parse_map_entry("bare").is_err());
        assert!(parse_map_entry("x=notanumber").is_err());
    }

    #[test]
    fn test_build_from_explicit_type() {
        let args = TransformArgs {
            kind: Some(TransformKind::Sigmoid),
            low: Some(0.0),
            high: Some(10.0),
            ..Default::default()
        };
        assert_eq!(
            args.build().unwrap(),
            Transform::Sigmoid { low: 0.0, high: 10.0, k: 0.5 }
        );
    }

    #[test]
    fn test_build_from_component_defaults() {
        let args = TransformArgs {
            component: Some("MolecularWeight".to_string()),
            ..Default::default()
        };
        assert_eq!(
            args.build().unwrap(),
            Transform::Sigmoid { low: 50.0, high: 100.0, k: 0.5 }
        );
    }

    #[test]
    fn test_build_component_override_wins() {
        let args = TransformArgs {
            component: Some("MolecularWeight".to_string()),
            high: Some(500.0),
            ..Default::default()
        };
        assert_eq!(
            args.build().unwrap(),
            Transform::Sigmoid { low: 50.0, high: 500.0, k: 0.5 }
        );
    }

    #[test]
    fn test_build_rejects_untransformed_component() {
        let args = TransformArgs {
            component: Some("CustomAlerts".to_string()),
            ..Default::default()
        };
        assert!(args.build().is_err());
    }

    #[test]
    fn test_build_mmp_mapping_defaults() {
        let args = TransformArgs {
            component: Some("MMP".to_string()),
            ..Default::default()
        };
        let Transform::ValueMapping(mapping) = args.build().unwrap() else {
            panic!("expected value mapping");
        };
        assert_eq!(mapping.lookup("MMP"), 0.5);
        assert_eq!(mapping.lookup("anything else"), 0.0);
    }

    #[test]
    fn test_component_key_falls_back() {
        let args = TransformArgs::default();
        assert_eq!(args.component_key(), "Component");
        let args = TransformArgs {
            component: Some("TanimotoSimilarity".to_string()),
            ..Default::default()
        };
        assert_eq!(args.component_key(), "TanimotoDistance");
    }
}
