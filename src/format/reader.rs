//! Token reader driving the instance builder.

use crate::builder::InstanceBuilder;
use crate::config::InstanceConfig;
use crate::error::{GvrpError, Result};
use crate::models::Instance;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads a GVRP instance.
pub trait GvrpProblem {
    /// Parses and builds the instance.
    fn read_gvrp(self, config: &InstanceConfig) -> Result<Instance>;
}

impl<R: Read> GvrpProblem for BufReader<R> {
    fn read_gvrp(mut self, config: &InstanceConfig) -> Result<Instance> {
        let mut text = String::new();
        self.read_to_string(&mut text)?;
        parse_instance(&text, config)
    }
}

impl GvrpProblem for &str {
    fn read_gvrp(self, config: &InstanceConfig) -> Result<Instance> {
        parse_instance(self, config)
    }
}

impl GvrpProblem for String {
    fn read_gvrp(self, config: &InstanceConfig) -> Result<Instance> {
        parse_instance(&self, config)
    }
}

/// Parses an instance from GVRP text.
///
/// Fails fast on the first grammar, range or linking error.
///
/// # Examples
///
/// ```
/// use u_gvrp::config::InstanceConfig;
/// use u_gvrp::format::parse_instance;
///
/// let text = "NAME : tiny COMMENT : GVRP DIMENSION : 3 VEHICLES : 1 GVRP_SETS : 1 \
///             CAPACITY : 5 EDGE_WEIGHT_TYPE : EUC_2D NODE_COORD_SECTION 1 0 0 2 3 4 3 6 8 \
///             GVRP_SET_SECTION 1 2 3 -1 DEMAND_SECTION 1 5";
/// let instance = parse_instance(text, &InstanceConfig::default()).unwrap();
/// assert_eq!(instance.name(), "tiny");
/// assert_eq!(instance.num_nodes(), 3);
/// assert_eq!(instance.clusters()[0].len(), 2);
///
/// let bad = text.replace("DIMENSION", "dimension");
/// assert!(parse_instance(&bad, &InstanceConfig::default()).is_err());
/// ```
pub fn parse_instance(text: &str, config: &InstanceConfig) -> Result<Instance> {
    GvrpReader::new(text, config.clone()).read_problem()
}

/// Reads and parses an instance file.
pub fn read_instance_file(path: impl AsRef<Path>, config: &InstanceConfig) -> Result<Instance> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading instance");
    BufReader::new(File::open(path)?).read_gvrp(config)
}

struct GvrpReader<'a> {
    tokens: Vec<(usize, &'a str)>,
    pos: usize,
    builder: InstanceBuilder,
    dimension: usize,
    set_count: usize,
}

impl<'a> GvrpReader<'a> {
    fn new(text: &'a str, config: InstanceConfig) -> Self {
        let tokens = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)))
            .collect();
        Self {
            tokens,
            pos: 0,
            builder: InstanceBuilder::with_config(config),
            dimension: 0,
            set_count: 0,
        }
    }

    fn read_problem(mut self) -> Result<Instance> {
        self.read_meta()?;
        self.read_coordinates()?;
        self.read_sets()?;
        self.read_demands()?;

        if self.pos < self.tokens.len() {
            tracing::trace!(
                ignored = self.tokens.len() - self.pos,
                "tokens after DEMAND_SECTION"
            );
        }

        self.builder.build()
    }

    fn read_meta(&mut self) -> Result<()> {
        self.read_key("NAME")?;
        let (_, name) = self.next_token("instance name")?;
        self.builder.name(name);

        self.read_key("COMMENT")?;
        self.expect("GVRP")?;

        self.read_key("DIMENSION")?;
        let dimension = self.next_int("DIMENSION value")?;
        self.ensure_remaining(dimension, 3, "node coordinates")?;
        self.builder.dimension(dimension)?;
        self.dimension = dimension as usize;

        self.read_key("VEHICLES")?;
        let vehicles = self.next_int("VEHICLES value")?;
        self.builder.fleet_size(vehicles)?;

        self.read_key("GVRP_SETS")?;
        let set_count = self.next_int("GVRP_SETS value")?;
        // id and -1 in the set section, id and demand in the demand section
        self.ensure_remaining(set_count, 4, "set entries")?;
        self.builder.customer_set_count(set_count)?;
        self.set_count = set_count as usize;

        self.read_key("CAPACITY")?;
        let capacity = self.next_int("CAPACITY value")?;
        self.builder.vehicle_capacity(capacity)?;

        self.read_key("EDGE_WEIGHT_TYPE")?;
        self.expect("EUC_2D")
    }

    fn read_coordinates(&mut self) -> Result<()> {
        self.expect("NODE_COORD_SECTION")?;
        for _ in 0..self.dimension {
            let id = self.next_int("node id")?;
            let x = self.next_int("x coordinate")?;
            let y = self.next_int("y coordinate")?;
            self.builder.customer_position(id, x, y)?;
        }
        Ok(())
    }

    fn read_sets(&mut self) -> Result<()> {
        self.expect("GVRP_SET_SECTION")?;
        for _ in 0..self.set_count {
            let set_id = self.next_int("set id")?;
            self.builder.check_cluster_id(set_id)?;
            loop {
                let node_id = self.next_int("node id or -1")?;
                if node_id == -1 {
                    break;
                }
                self.builder.customer_set(node_id, set_id)?;
            }
        }
        Ok(())
    }

    fn read_demands(&mut self) -> Result<()> {
        self.expect("DEMAND_SECTION")?;
        for _ in 0..self.set_count {
            let set_id = self.next_int("set id")?;
            let demand = self.next_int("demand")?;
            self.builder.customer_set_demand(set_id, demand)?;
        }
        Ok(())
    }

    /// Fails before allocating when fewer tokens remain than `count` entries
    /// of `per_entry` tokens need.
    fn ensure_remaining(&self, count: i32, per_entry: usize, expected: &str) -> Result<()> {
        let needed = usize::try_from(count).unwrap_or(0).saturating_mul(per_entry);
        if needed > self.tokens.len() - self.pos {
            return Err(GvrpError::UnexpectedEof {
                expected: format!("{count} {expected}"),
            });
        }
        Ok(())
    }

    fn read_key(&mut self, key: &str) -> Result<()> {
        self.expect(key)?;
        self.expect(":")
    }

    fn expect(&mut self, expected: &str) -> Result<()> {
        let (line, token) = self.next_token(&format!("'{expected}'"))?;
        if token != expected {
            return Err(GvrpError::UnexpectedToken {
                line,
                expected: format!("'{expected}'"),
                found: token.to_string(),
            });
        }
        Ok(())
    }

    fn next_token(&mut self, expected: &str) -> Result<(usize, &'a str)> {
        let token = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or_else(|| GvrpError::UnexpectedEof {
                expected: expected.to_string(),
            })?;
        self.pos += 1;
        Ok(token)
    }

    fn next_int(&mut self, expected: &str) -> Result<i32> {
        let (line, token) = self.next_token(expected)?;
        token.parse::<i32>().map_err(|_| GvrpError::InvalidInteger {
            line,
            token: token.to_string(),
        })
    }
}
