use anyhow::{Context, Result};
use cayley::api::{
    build_ball, checked_radius, classify, effective_generators, evaluate, find_dead_ends, geodesic,
    known_growth, parse_word, render_dot, select_generators, Algebra, AlgebraOptions,
    AlgebraVisitor, AnyAlgebra, BallCfg, DeadEndCfg, Generator, GrowthProfile, NodeLabel,
    Registry,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Cayley graph explorer: balls, growth and dead ends")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// List the algebras the registry knows
    Groups,
    /// Build a ball and print its size, optionally exporting DOT
    Ball(BallArgs),
    /// Sphere/ball growth table, optionally written as CSV
    Growth(GrowthArgs),
    /// Evaluate a word and look up its geodesic
    Eval(EvalArgs),
    /// Scan the sphere S_R for dead ends
    DeadEnds(DeadEndArgs),
}

/// Algebra selection shared by every subcommand.
#[derive(Args, Clone, Debug, Serialize)]
struct AlgebraArgs {
    /// Registry name (see `groups`)
    #[arg(long, default_value = "lamplighter")]
    algebra: String,
    /// n for Z/n and Dn
    #[arg(long)]
    order: Option<u64>,
    /// Free group rank
    #[arg(long)]
    rank: Option<usize>,
    /// Abelian product moduli, comma-separated
    #[arg(long, value_delimiter = ',')]
    moduli: Option<Vec<u64>>,
    /// Wreath spec, e.g. "Z/3 wr Z2"
    #[arg(long)]
    spec: Option<String>,
    /// Toggle offset as a top-group word; repeatable
    #[arg(long = "offset")]
    offsets: Vec<String>,
    /// Top-group moves to keep, comma-separated
    #[arg(long = "top-gen", value_delimiter = ',')]
    top_generators: Vec<String>,
    /// Lamp group for `lamplighter`
    #[arg(long)]
    base: Option<String>,
    /// Generator subset by name, comma-separated (default: all)
    #[arg(long, value_delimiter = ',')]
    generators: Vec<String>,
    /// Add formal inverses of the chosen generators
    #[arg(long)]
    symmetrize: bool,
}

impl AlgebraArgs {
    fn options(&self) -> AlgebraOptions {
        AlgebraOptions {
            order: self.order,
            rank: self.rank,
            moduli: self.moduli.clone(),
            spec: self.spec.clone(),
            offsets: self.offsets.clone(),
            top_generators: self.top_generators.clone(),
            base: self.base.clone(),
        }
    }

    fn build(&self, registry: &Registry) -> Result<AnyAlgebra> {
        registry
            .build(&self.algebra, &self.options())
            .with_context(|| format!("building algebra '{}'", self.algebra))
    }

    fn generators<A: Algebra>(&self, algebra: &A) -> Result<Vec<Generator<A::Step>>> {
        let picked = select_generators(algebra, &self.generators)?;
        Ok(effective_generators(algebra, &picked, self.symmetrize))
    }
}

#[derive(Args, Clone, Debug, Serialize)]
struct BallArgs {
    #[command(flatten)]
    #[serde(flatten)]
    select: AlgebraArgs,
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    radius: i64,
    /// Write the ball as Graphviz DOT
    #[arg(long)]
    dot: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = LabelArg::Word)]
    label: LabelArg,
}

#[derive(Clone, Copy, Debug, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
enum LabelArg {
    Word,
    State,
    Id,
}

impl From<LabelArg> for NodeLabel {
    fn from(l: LabelArg) -> Self {
        match l {
            LabelArg::Word => NodeLabel::Word,
            LabelArg::State => NodeLabel::State,
            LabelArg::Id => NodeLabel::Id,
        }
    }
}

#[derive(Args, Clone, Debug, Serialize)]
struct GrowthArgs {
    #[command(flatten)]
    #[serde(flatten)]
    select: AlgebraArgs,
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    radius: i64,
    /// Write the table as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args, Clone, Debug, Serialize)]
struct EvalArgs {
    #[command(flatten)]
    #[serde(flatten)]
    select: AlgebraArgs,
    /// Generator names separated by spaces ("e" for the identity)
    #[arg(long)]
    word: String,
    /// Largest ball searched for a geodesic
    #[arg(long, default_value_t = 8)]
    max_radius: usize,
}

#[derive(Args, Clone, Debug, Serialize)]
struct DeadEndArgs {
    #[command(flatten)]
    #[serde(flatten)]
    select: AlgebraArgs,
    #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
    radius: i64,
    #[arg(long, default_value_t = 6)]
    depth_cap: usize,
    /// Records printed (0 = all)
    #[arg(long, default_value_t = 10)]
    max_examples: usize,
    /// Write the full report as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let registry = Registry::standard();
    let out = match cmd.action {
        Action::Groups => groups(&registry),
        Action::Ball(args) => ball(&registry, &args)?,
        Action::Growth(args) => growth(&registry, &args)?,
        Action::Eval(args) => eval(&registry, &args)?,
        Action::DeadEnds(args) => dead_ends(&registry, &args)?,
    };
    print!("{out}");
    Ok(())
}

fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

fn groups(registry: &Registry) -> String {
    let mut out = String::new();
    for entry in registry.entries() {
        let options = if entry.options.is_empty() {
            String::new()
        } else {
            format!(" [{}]", entry.options.join(", "))
        };
        out.push_str(&format!("{:<16} {}{}\n", entry.name, entry.summary, options));
    }
    out
}

fn ball(registry: &Registry, args: &BallArgs) -> Result<String> {
    tracing::info!(algebra = %args.select.algebra, radius = args.radius, dot = ?args.dot, "ball");
    let radius = checked_radius(args.radius)?;
    let algebra = args.select.build(registry)?;

    struct Run<'a> {
        args: &'a BallArgs,
        radius: usize,
    }
    impl AlgebraVisitor for Run<'_> {
        type Output = Result<String>;

        fn visit<A: Algebra>(self, algebra: &A) -> Result<String> {
            let gens = self.args.select.generators(algebra)?;
            let ball = build_ball(algebra, &gens, BallCfg::new(self.radius))?;
            let sizes: Vec<String> = ball.sphere_sizes().iter().map(usize::to_string).collect();
            let mut out = format!(
                "{} with {} generator(s), radius {}\nV={} E={}\nspheres: {}\n",
                algebra.label(),
                gens.len(),
                self.radius,
                ball.len(),
                ball.edges().len(),
                sizes.join(" ")
            );
            if let Some(path) = &self.args.dot {
                let dot = render_dot(algebra, &ball, self.args.label.into());
                write_artifact(path, dot.as_bytes())?;
                let params = serde_json::to_value(self.args)?;
                let sidecar = write_sidecar(path, Payload::new(algebra.label(), params))?;
                out.push_str(&format!(
                    "wrote {} ({})\n",
                    path.display(),
                    sidecar.display()
                ));
            }
            Ok(out)
        }
    }
    algebra.visit(Run { args, radius })
}

fn growth(registry: &Registry, args: &GrowthArgs) -> Result<String> {
    tracing::info!(algebra = %args.select.algebra, radius = args.radius, csv = ?args.csv, "growth");
    let radius = checked_radius(args.radius)?;
    let algebra = args.select.build(registry)?;

    struct Profile<'a> {
        select: &'a AlgebraArgs,
        radius: usize,
    }
    impl AlgebraVisitor for Profile<'_> {
        type Output = Result<GrowthProfile>;

        fn visit<A: Algebra>(self, algebra: &A) -> Result<GrowthProfile> {
            let gens = self.select.generators(algebra)?;
            let ball = build_ball(algebra, &gens, BallCfg::new(self.radius))?;
            Ok(GrowthProfile::from_ball(&ball))
        }
    }
    let profile = algebra.visit(Profile {
        select: &args.select,
        radius,
    })?;

    // Closed forms hold for the default generating set only.
    let default_gens = args.select.generators.is_empty() && !args.select.symmetrize;
    let known = algebra
        .as_factor()
        .filter(|_| default_gens)
        .and_then(known_growth);
    let class = classify(&profile, known.as_ref());
    let mut out = format!(
        "{}\n{}\ngrowth: {}\n",
        algebra.label(),
        profile.table(),
        class
    );

    if let Some(path) = &args.csv {
        let mut df = growth_frame(&profile)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        CsvWriter::new(&mut file).finish(&mut df)?;
        let mut params = serde_json::to_value(args)?;
        params["class"] = json!(class.to_string());
        let sidecar = write_sidecar(path, Payload::new(algebra.label(), params))?;
        out.push_str(&format!(
            "wrote {} ({})\n",
            path.display(),
            sidecar.display()
        ));
    }
    Ok(out)
}

fn growth_frame(profile: &GrowthProfile) -> Result<DataFrame> {
    let r: Vec<u64> = (0..profile.sphere.len() as u64).collect();
    let sphere: Vec<u64> = profile.sphere.iter().map(|&s| s as u64).collect();
    let ball: Vec<u64> = profile.ball.iter().map(|&b| b as u64).collect();
    let mut root: Vec<Option<f64>> = vec![None];
    root.extend(profile.roots());
    Ok(df!(
        "r" => r,
        "sphere" => sphere,
        "ball" => ball,
        "root" => root
    )?)
}

fn eval(registry: &Registry, args: &EvalArgs) -> Result<String> {
    tracing::info!(algebra = %args.select.algebra, word = %args.word, "eval");
    let algebra = args.select.build(registry)?;

    struct Run<'a> {
        args: &'a EvalArgs,
    }
    impl AlgebraVisitor for Run<'_> {
        type Output = Result<String>;

        fn visit<A: Algebra>(self, algebra: &A) -> Result<String> {
            let gens = self.args.select.generators(algebra)?;
            let labels: Vec<&str> = gens.iter().map(|g| g.name.as_str()).collect();
            let word = parse_word(&labels, &self.args.word)?;
            let state = evaluate(algebra, &gens, &word);
            let mut out = format!("state: {}\n", algebra.pretty(&state));
            match geodesic(algebra, &gens, &state, self.args.max_radius)? {
                Some(geo) => {
                    let text = if geo.names.is_empty() {
                        "e".to_string()
                    } else {
                        geo.names.join(" ")
                    };
                    out.push_str(&format!("distance: {}\ngeodesic: {}\n", geo.distance, text));
                }
                None => out.push_str(&format!(
                    "distance: > {} (outside the searched ball)\n",
                    self.args.max_radius
                )),
            }
            Ok(out)
        }
    }
    algebra.visit(Run { args })
}

fn dead_ends(registry: &Registry, args: &DeadEndArgs) -> Result<String> {
    tracing::info!(
        algebra = %args.select.algebra,
        radius = args.radius,
        depth_cap = args.depth_cap,
        "dead_ends"
    );
    let cfg = DeadEndCfg {
        radius: checked_radius(args.radius)?,
        depth_cap: args.depth_cap,
        max_examples: args.max_examples,
    };
    let algebra = args.select.build(registry)?;

    struct Run<'a> {
        args: &'a DeadEndArgs,
        cfg: DeadEndCfg,
    }
    impl AlgebraVisitor for Run<'_> {
        type Output = Result<String>;

        fn visit<A: Algebra>(self, algebra: &A) -> Result<String> {
            let gens = self.args.select.generators(algebra)?;
            let (_, report) = find_dead_ends(algebra, &gens, self.cfg)?;
            let mut out = format!("{}\n{}", algebra.label(), report.render(self.cfg.max_examples));
            if let Some(path) = &self.args.json {
                write_artifact(path, &serde_json::to_vec_pretty(&report)?)?;
                let params = serde_json::to_value(self.args)?;
                let sidecar = write_sidecar(path, Payload::new(algebra.label(), params))?;
                out.push_str(&format!(
                    "wrote {} ({})\n",
                    path.display(),
                    sidecar.display()
                ));
            }
            Ok(out)
        }
    }
    algebra.visit(Run { args, cfg })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn action(argv: &[&str]) -> Action {
        let mut full = vec!["cli"];
        full.extend_from_slice(argv);
        Cmd::parse_from(full).action
    }

    #[test]
    fn groups_lists_the_registry() {
        let out = groups(&Registry::standard());
        assert!(out.lines().any(|l| l.starts_with("lamplighter ")));
        assert!(out.contains("[order]"));
        assert_eq!(out.lines().count(), Registry::standard().entries().len());
    }

    #[test]
    fn ball_reports_counts_and_writes_dot() {
        let dir = tempdir().unwrap();
        let dot = dir.path().join("out").join("l2.dot");
        let dot_arg = dot.to_string_lossy().to_string();
        let Action::Ball(args) = action(&["ball", "--radius", "3", "--dot", &dot_arg]) else {
            panic!("expected ball");
        };
        let out = ball(&Registry::standard(), &args).unwrap();
        assert!(out.contains("V=22 E=30"), "{out}");
        assert!(out.contains("spheres: 1 3 6 12"));
        assert!(std::fs::read_to_string(&dot).unwrap().starts_with("digraph"));
        let prov = dir.path().join("out").join("l2.provenance.json");
        let parsed: Value = serde_json::from_slice(&std::fs::read(prov).unwrap()).unwrap();
        assert_eq!(parsed["algebra"], "Z/2 wr Z");
        assert_eq!(parsed["params"]["radius"], 3);
        assert_eq!(parsed["params"]["algebra"], "lamplighter");
    }

    #[test]
    fn negative_radius_is_rejected() {
        let Action::Ball(args) = action(&["ball", "--radius", "-1"]) else {
            panic!("expected ball");
        };
        assert!(ball(&Registry::standard(), &args).is_err());
    }

    #[test]
    fn growth_writes_csv() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("growth.csv");
        let csv_arg = csv.to_string_lossy().to_string();
        let Action::Growth(args) =
            action(&["growth", "--algebra", "free", "--radius", "3", "--csv", &csv_arg])
        else {
            panic!("expected growth");
        };
        let out = growth(&Registry::standard(), &args).unwrap();
        assert!(out.contains("exponential"), "{out}");
        let text = std::fs::read_to_string(&csv).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("r,sphere,ball,root"));
        assert_eq!(lines.count(), 4);
        assert!(dir.path().join("growth.provenance.json").exists());
    }

    #[test]
    fn eval_prints_state_and_geodesic() {
        let Action::Eval(args) = action(&["eval", "--word", "t a T t"]) else {
            panic!("expected eval");
        };
        let out = eval(&Registry::standard(), &args).unwrap();
        assert!(out.contains("state: d=1|1:1"), "{out}");
        assert!(out.contains("distance: 2"), "{out}");
        assert!(out.contains("geodesic: t a"), "{out}");
    }

    #[test]
    fn dead_ends_default_scan_to_json() {
        let dir = tempdir().unwrap();
        let json_path = dir.path().join("de.json");
        let json_arg = json_path.to_string_lossy().to_string();
        let Action::DeadEnds(args) = action(&["dead-ends", "--json", &json_arg]) else {
            panic!("expected dead-ends");
        };
        let out = dead_ends(&Registry::standard(), &args).unwrap();
        assert!(out.contains("Dead ends found: 1"), "{out}");
        let parsed: Value = serde_json::from_slice(&std::fs::read(&json_path).unwrap()).unwrap();
        assert_eq!(parsed["dead_ends"][0]["vertex"], 194);
        assert_eq!(parsed["depth_cap"], 6);
        assert!(dir.path().join("de.provenance.json").exists());
    }

    #[test]
    fn oversized_depth_cap_is_an_error() {
        let cap = usize::MAX.to_string();
        let Action::DeadEnds(args) = action(&["dead-ends", "--depth-cap", &cap]) else {
            panic!("expected dead-ends");
        };
        let err = dead_ends(&Registry::standard(), &args).unwrap_err();
        assert!(format!("{err:#}").contains("depth_cap"), "{err:#}");
    }

    #[test]
    fn unknown_algebra_names_the_problem() {
        let Action::Ball(args) = action(&["ball", "--algebra", "quaternion"]) else {
            panic!("expected ball");
        };
        let err = ball(&Registry::standard(), &args).unwrap_err();
        assert!(format!("{err:#}").contains("quaternion"));
    }
}
