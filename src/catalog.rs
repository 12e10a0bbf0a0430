//! Problem catalog: named benchmark instances with ground-truth values.
//!
//! Every [`Problem`] groups a criterion, a fixed start point, the known global
//! minimizer (or an explicit non-unique marker) and the exact objective values
//! at both points. The stored values are literals, never recomputed at query
//! time; the `test_reference_values_reproduce` sweep below is the contract
//! that keeps them honest.

use crate::criterion::{Arity, Criterion};
use crate::error::{BenchmarkError, Result};
use crate::functions::*;
use crate::tags::family_name;
use ndarray::{array, Array1};
use std::collections::HashMap;

/// Known global minimizer of a problem.
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionX {
    /// A single known global minimizer.
    Point(Array1<f64>),
    /// The minimum is attained on a set (symmetric or flat minimizers);
    /// callers must branch on this before indexing.
    NonUnique,
}

impl SolutionX {
    /// Returns the minimizer if it is unique.
    pub fn as_point(&self) -> Option<&Array1<f64>> {
        match self {
            SolutionX::Point(x) => Some(x),
            SolutionX::NonUnique => None,
        }
    }
}

/// One benchmark instance.
#[derive(Debug, Clone)]
pub struct Problem {
    /// Unique problem key, e.g. `"ackley_good_start"`.
    pub name: &'static str,
    /// The criterion function with its declared arity.
    pub criterion: Criterion,
    /// Initial point handed to the optimizer under test.
    pub start_x: Array1<f64>,
    /// Known global minimizer, or the explicit non-unique marker.
    pub solution_x: SolutionX,
    /// Exact value of `criterion(start_x)`, stored as ground truth.
    pub start_criterion: f64,
    /// Exact value of the global minimum.
    pub solution_criterion: f64,
}

impl Problem {
    /// Function family this problem belongs to (start-variant suffix stripped),
    /// usable as a key into [`crate::tags::TagTable`].
    pub fn family(&self) -> &'static str {
        family_name(self.name)
    }
}

/// Which problems to fetch from the catalog.
#[derive(Debug, Clone, Copy)]
pub enum ProblemSelection<'a> {
    /// Every registered problem.
    All,
    /// Only the named problems; unknown names fail the whole request.
    Names(&'a [&'a str]),
}

const ACKLEY: Criterion = Criterion::new("ackley", Arity::Any, ackley);
const ACKLEY2: Criterion = Criterion::new("ackley2", Arity::Fixed(2), ackley2);
const ACKLEY3: Criterion = Criterion::new("ackley3", Arity::Fixed(2), ackley3);
const ACKLEY4: Criterion = Criterion::new("ackley4", Arity::Fixed(2), ackley4);
const ADJIMAN: Criterion = Criterion::new("adjiman", Arity::Fixed(2), adjiman);
const ALPINE1: Criterion = Criterion::new("alpine1", Arity::Any, alpine1);
const ALPINE2: Criterion = Criterion::new("alpine2", Arity::Any, alpine2);
const BARTELS: Criterion = Criterion::new("bartels", Arity::Fixed(2), bartels);
const BEALE: Criterion = Criterion::new("beale", Arity::Fixed(2), beale);
const BIRD: Criterion = Criterion::new("bird", Arity::Fixed(2), bird);
const BOHACHEVSKY1: Criterion = Criterion::new("bohachevsky1", Arity::Fixed(2), bohachevsky1);
const BOHACHEVSKY2: Criterion = Criterion::new("bohachevsky2", Arity::Fixed(2), bohachevsky2);
const BOHACHEVSKY3: Criterion = Criterion::new("bohachevsky3", Arity::Fixed(2), bohachevsky3);
const BOOTH: Criterion = Criterion::new("booth", Arity::Fixed(2), booth);
const BRANIN: Criterion = Criterion::new("branin", Arity::Fixed(2), branin);
const BRENT: Criterion = Criterion::new("brent", Arity::Fixed(2), brent);
const BROWN: Criterion = Criterion::new("brown", Arity::Fixed(2), brown);
const BUKIN6: Criterion = Criterion::new("bukin6", Arity::Fixed(2), bukin6);
const COLVILLE: Criterion = Criterion::new("colville", Arity::Fixed(4), colville);
const CROSSINTRAY: Criterion = Criterion::new("crossintray", Arity::Fixed(2), crossintray);
const DEJONG5: Criterion = Criterion::new("dejong5", Arity::Fixed(2), dejong5);
const ROSENBROCK: Criterion = Criterion::new("rosenbrock", Arity::Fixed(2), rosenbrock);

/// Registry of benchmark problems, keyed by name.
///
/// Iteration and [`ProblemCatalog::problem_names`] follow construction order,
/// so harnesses that run "all problems" do so deterministically.
pub struct ProblemCatalog {
    order: Vec<&'static str>,
    problems: HashMap<&'static str, Problem>,
}

impl ProblemCatalog {
    /// Builds the full catalog from its literal tables.
    pub fn new() -> Self {
        let mut catalog = Self {
            order: Vec::new(),
            problems: HashMap::new(),
        };

        catalog.insert(Problem {
            name: "ackley_good_start",
            criterion: ACKLEY,
            start_x: Array1::from_elem(10, 3.0),
            solution_x: SolutionX::Point(Array1::zeros(10)),
            start_criterion: 9.023767278119472,
            solution_criterion: 0.0,
        });
        catalog.insert(Problem {
            name: "ackley_bad_start",
            criterion: ACKLEY,
            start_x: Array1::from_elem(10, 30.0),
            solution_x: SolutionX::Point(Array1::zeros(10)),
            start_criterion: 19.950424956466673,
            solution_criterion: 0.0,
        });
        catalog.insert(Problem {
            name: "ackley2_good_start",
            criterion: ACKLEY2,
            start_x: Array1::from_elem(2, 3.0),
            solution_x: SolutionX::Point(Array1::zeros(2)),
            start_criterion: -85.60889823804698,
            solution_criterion: -200.0,
        });
        catalog.insert(Problem {
            name: "ackley2_bad_start",
            criterion: ACKLEY2,
            start_x: Array1::from_elem(2, 25.0),
            solution_x: SolutionX::Point(Array1::zeros(2)),
            start_criterion: -0.1698651409438339,
            solution_criterion: -200.0,
        });
        catalog.insert(Problem {
            name: "ackley3_good_start",
            criterion: ACKLEY3,
            start_x: Array1::from_elem(2, 3.0),
            solution_x: SolutionX::NonUnique,
            start_criterion: -82.57324651934985,
            solution_criterion: -170.07756299785044,
        });
        catalog.insert(Problem {
            name: "ackley3_bad_start",
            criterion: ACKLEY3,
            start_x: Array1::from_elem(2, 25.0),
            solution_x: SolutionX::NonUnique,
            start_criterion: 8.358584120180984,
            solution_criterion: -170.07756299785044,
        });
        catalog.insert(Problem {
            name: "ackley4_good_start",
            criterion: ACKLEY4,
            start_x: Array1::from_elem(2, 3.0),
            solution_x: SolutionX::Point(array![-1.51, -0.755]),
            // The source catalog stored the solution value (sign-flipped) here;
            // this is what the formula actually yields at (3, 3).
            start_criterion: 5.515844770158779,
            solution_criterion: -4.5901006651507235,
        });
        catalog.insert(Problem {
            name: "ackley4_bad_start",
            criterion: ACKLEY4,
            start_x: Array1::from_elem(2, 25.0),
            solution_x: SolutionX::Point(array![-1.51, -0.755]),
            start_criterion: 31.054276897735043,
            solution_criterion: -4.5901006651507235,
        });
        catalog.insert(Problem {
            name: "adjiman",
            criterion: ADJIMAN,
            start_x: array![-1.0, 1.0],
            solution_x: SolutionX::Point(array![2.0, 0.10578]),
            start_criterion: 0.954648713412841,
            solution_criterion: -2.0218067833370204,
        });
        catalog.insert(Problem {
            name: "alpine1_good_start",
            criterion: ALPINE1,
            start_x: Array1::from_elem(10, 2.0),
            solution_x: SolutionX::Point(Array1::zeros(10)),
            start_criterion: 20.18594853651364,
            solution_criterion: 0.0,
        });
        catalog.insert(Problem {
            name: "alpine1_bad_start",
            criterion: ALPINE1,
            start_x: Array1::from_elem(10, 10.0),
            solution_x: SolutionX::Point(Array1::zeros(10)),
            start_criterion: 44.40211108893698,
            solution_criterion: 0.0,
        });
        catalog.insert(Problem {
            name: "alpine2_good_start",
            criterion: ALPINE2,
            start_x: Array1::from_elem(10, 9.0),
            solution_x: SolutionX::Point(Array1::from_elem(10, 7.917)),
            start_criterion: -8.345137486473694,
            solution_criterion: -30491.15748225926,
        });
        catalog.insert(Problem {
            name: "alpine2_bad_start",
            criterion: ALPINE2,
            start_x: Array1::ones(10),
            solution_x: SolutionX::Point(Array1::from_elem(10, 7.917)),
            start_criterion: -0.177988299732403,
            solution_criterion: -30491.15748225926,
        });
        catalog.insert(Problem {
            name: "bartels",
            criterion: BARTELS,
            start_x: array![2.0, 2.0],
            solution_x: SolutionX::Point(Array1::zeros(2)),
            start_criterion: 13.325444263372823,
            solution_criterion: 1.0,
        });
        catalog.insert(Problem {
            name: "beale",
            criterion: BEALE,
            start_x: array![1.0, 1.0],
            solution_x: SolutionX::Point(array![3.0, 0.5]),
            start_criterion: 12.5625,
            solution_criterion: 0.0,
        });
        catalog.insert(Problem {
            name: "bird",
            criterion: BIRD,
            start_x: array![2.0, 2.0],
            solution_x: SolutionX::NonUnique,
            start_criterion: 6.33613050913973,
            solution_criterion: -106.76453674760198,
        });
        catalog.insert(Problem {
            name: "bohachevsky1",
            criterion: BOHACHEVSKY1,
            start_x: array![5.0, 5.0],
            solution_x: SolutionX::Point(Array1::zeros(2)),
            start_criterion: 75.6,
            solution_criterion: 0.0,
        });
        catalog.insert(Problem {
            name: "bohachevsky2",
            criterion: BOHACHEVSKY2,
            start_x: array![5.0, 5.0],
            solution_x: SolutionX::Point(Array1::zeros(2)),
            start_criterion: 75.6,
            solution_criterion: 0.0,
        });
        catalog.insert(Problem {
            name: "bohachevsky3",
            criterion: BOHACHEVSKY3,
            start_x: array![5.0, 5.0],
            solution_x: SolutionX::Point(Array1::zeros(2)),
            start_criterion: 75.6,
            solution_criterion: 0.0,
        });
        catalog.insert(Problem {
            name: "booth",
            criterion: BOOTH,
            start_x: array![0.0, 0.0],
            solution_x: SolutionX::Point(array![1.0, 3.0]),
            start_criterion: 74.0,
            solution_criterion: 0.0,
        });
        catalog.insert(Problem {
            name: "branin",
            criterion: BRANIN,
            start_x: array![2.0, 2.0],
            solution_x: SolutionX::Point(array![std::f64::consts::PI, 2.275]),
            start_criterion: 7.7827046481458035,
            solution_criterion: 0.39788735772973816,
        });
        catalog.insert(Problem {
            name: "brent",
            criterion: BRENT,
            start_x: array![0.0, 0.0],
            solution_x: SolutionX::Point(array![-10.0, -10.0]),
            start_criterion: 201.0,
            solution_criterion: 1.3838965267367376e-87,
        });
        catalog.insert(Problem {
            name: "brown",
            criterion: BROWN,
            start_x: array![1.0, 1.0],
            solution_x: SolutionX::Point(Array1::zeros(2)),
            start_criterion: 2.0,
            solution_criterion: 0.0,
        });
        catalog.insert(Problem {
            name: "bukin6",
            criterion: BUKIN6,
            start_x: array![-15.0, -2.0],
            solution_x: SolutionX::Point(array![-10.0, 1.0]),
            start_criterion: 206.20528128088304,
            solution_criterion: 0.0,
        });
        catalog.insert(Problem {
            name: "colville",
            criterion: COLVILLE,
            start_x: Array1::zeros(4),
            solution_x: SolutionX::Point(Array1::ones(4)),
            start_criterion: 42.0,
            solution_criterion: 0.0,
        });
        catalog.insert(Problem {
            name: "crossintray",
            criterion: CROSSINTRAY,
            start_x: array![0.0, 0.0],
            solution_x: SolutionX::NonUnique,
            start_criterion: -0.0001,
            solution_criterion: -2.0626118708227383,
        });
        catalog.insert(Problem {
            name: "dejong5",
            criterion: DEJONG5,
            start_x: array![0.0, 0.0],
            solution_x: SolutionX::Point(array![-32.0, -32.0]),
            start_criterion: 12.670505812885983,
            solution_criterion: 0.9980038388186492,
        });
        catalog.insert(Problem {
            name: "rosenbrock_good_start",
            criterion: ROSENBROCK,
            start_x: array![-1.2, 1.0],
            solution_x: SolutionX::Point(Array1::ones(2)),
            start_criterion: 24.2,
            solution_criterion: 0.0,
        });

        catalog
    }

    fn insert(&mut self, problem: Problem) {
        self.order.push(problem.name);
        self.problems.insert(problem.name, problem);
    }

    /// Looks up a single problem by name.
    pub fn get_problem(&self, name: &str) -> Result<&Problem> {
        self.problems
            .get(name)
            .ok_or_else(|| BenchmarkError::UnknownProblems {
                names: vec![name.to_string()],
            })
    }

    /// All registered problem names, in construction order.
    pub fn problem_names(&self) -> &[&'static str] {
        &self.order
    }

    /// Fetches a set of problems.
    ///
    /// With [`ProblemSelection::Names`], every unrecognized name is collected
    /// into a single [`BenchmarkError::UnknownProblems`] so a caller can fix
    /// all typos in one pass.
    pub fn get_problems(&self, selection: ProblemSelection) -> Result<HashMap<&'static str, &Problem>> {
        match selection {
            ProblemSelection::All => Ok(self
                .problems
                .iter()
                .map(|(&name, problem)| (name, problem))
                .collect()),
            ProblemSelection::Names(names) => {
                let mut unknown = Vec::new();
                let mut found = HashMap::new();
                for &name in names {
                    match self.problems.get_key_value(name) {
                        Some((&key, problem)) => {
                            found.insert(key, problem);
                        }
                        None => unknown.push(name.to_string()),
                    }
                }
                if unknown.is_empty() {
                    Ok(found)
                } else {
                    Err(BenchmarkError::UnknownProblems { names: unknown })
                }
            }
        }
    }

    /// Iterates over all problems in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.order.iter().map(|name| &self.problems[name])
    }

    /// Number of registered problems.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the catalog holds no problems.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for ProblemCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-8;

    /// The load-bearing contract: every stored reference value must reproduce
    /// when the criterion is evaluated at the recorded point.
    #[test]
    fn test_reference_values_reproduce() {
        let catalog = ProblemCatalog::new();

        for problem in catalog.iter() {
            let at_start = problem
                .criterion
                .evaluate(&problem.start_x)
                .expect("start_x must satisfy the criterion arity");
            assert!(
                (at_start - problem.start_criterion).abs() < TOLERANCE,
                "{}: criterion(start_x) = {:.16}, stored start_criterion = {:.16}",
                problem.name,
                at_start,
                problem.start_criterion
            );

            if let SolutionX::Point(solution) = &problem.solution_x {
                let at_solution = problem
                    .criterion
                    .evaluate(solution)
                    .expect("solution_x must satisfy the criterion arity");
                assert!(
                    (at_solution - problem.solution_criterion).abs() < TOLERANCE,
                    "{}: criterion(solution_x) = {:.16}, stored solution_criterion = {:.16}",
                    problem.name,
                    at_solution,
                    problem.solution_criterion
                );
            }
        }
    }

    #[test]
    fn test_point_lengths_match_declared_arity() {
        let catalog = ProblemCatalog::new();

        for problem in catalog.iter() {
            if let Arity::Fixed(n) = problem.criterion.arity {
                assert_eq!(
                    problem.start_x.len(),
                    n,
                    "{}: start_x length mismatch",
                    problem.name
                );
            }
            if let SolutionX::Point(solution) = &problem.solution_x {
                assert_eq!(
                    problem.start_x.len(),
                    solution.len(),
                    "{}: start_x and solution_x lengths differ",
                    problem.name
                );
            }
        }
    }

    #[test]
    fn test_problem_names_are_stable() {
        let a = ProblemCatalog::new();
        let b = ProblemCatalog::new();

        assert_eq!(a.problem_names(), b.problem_names());
        assert_eq!(a.problem_names()[0], "ackley_good_start");
        assert_eq!(*a.problem_names().last().unwrap(), "rosenbrock_good_start");
        assert_eq!(a.len(), 28);
    }

    #[test]
    fn test_get_problem_rosenbrock_scenario() {
        let catalog = ProblemCatalog::new();
        let problem = catalog.get_problem("rosenbrock_good_start").unwrap();

        assert_eq!(problem.start_criterion, 24.2);
        let at_start = problem.criterion.evaluate(&problem.start_x).unwrap();
        assert!((at_start - 24.2).abs() < 1e-8);

        let solution = problem.solution_x.as_point().unwrap();
        assert_eq!(solution.as_slice().unwrap(), &[1.0, 1.0]);
        assert_eq!(problem.solution_criterion, 0.0);
    }

    #[test]
    fn test_non_unique_solution_marker() {
        let catalog = ProblemCatalog::new();
        let problem = catalog.get_problem("ackley3_good_start").unwrap();

        assert_eq!(problem.solution_x, SolutionX::NonUnique);
        assert!(problem.solution_x.as_point().is_none());
        assert_eq!(problem.solution_criterion, -170.07756299785044);
    }

    #[test]
    fn test_get_problems_all() {
        let catalog = ProblemCatalog::new();
        let all = catalog.get_problems(ProblemSelection::All).unwrap();

        assert_eq!(all.len(), catalog.len());
        assert!(all.contains_key("adjiman"));
    }

    #[test]
    fn test_get_problems_reports_every_unknown_name() {
        let catalog = ProblemCatalog::new();
        let err = catalog
            .get_problems(ProblemSelection::Names(&[
                "booth",
                "unknown_name",
                "also_missing",
            ]))
            .unwrap_err();

        assert_eq!(
            err,
            BenchmarkError::UnknownProblems {
                names: vec!["unknown_name".to_string(), "also_missing".to_string()],
            }
        );
    }

    #[test]
    fn test_get_problem_is_pure() {
        let catalog = ProblemCatalog::new();
        let first = catalog.get_problem("booth").unwrap();
        let second = catalog.get_problem("booth").unwrap();

        assert_eq!(first.name, second.name);
        assert_eq!(first.start_x, second.start_x);
        assert_eq!(first.start_criterion, second.start_criterion);
    }

    #[test]
    fn test_family_strips_start_variants() {
        let catalog = ProblemCatalog::new();

        assert_eq!(
            catalog.get_problem("ackley_bad_start").unwrap().family(),
            "ackley"
        );
        assert_eq!(catalog.get_problem("adjiman").unwrap().family(), "adjiman");
    }
}
