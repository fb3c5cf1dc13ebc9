//! Lloyd's k-means for 2D points read from plain text files.
//!
//! ```
//! use kmeans2d::{DataSet, KMeansConfig};
//!
//! let ds = DataSet::from_reader("0 0\n0 1\n10 10\n10 11\n".as_bytes()).unwrap();
//! let res = ds.kmeans(&KMeansConfig::new(2).with_seed(1)).unwrap();
//! assert_eq!(res.labels.len(), 4);
//! assert_eq!(res.labels[0], res.labels[1]);
//! assert_ne!(res.labels[0], res.labels[2]);
//! ```

pub mod assign;
pub mod cluster;
pub mod config;
pub mod converge;
pub mod data;
pub mod error;
pub mod init;
pub mod kmeans;
pub mod output;
pub mod update;

pub use cluster::{Cluster, ClusterSet};
pub use config::{KMeansConfig, DEFAULT_MAX_ITERATIONS};
pub use converge::ConvergenceCheck;
pub use data::{DataSet, Point, PointParseError};
pub use error::{Error, Result};
pub use init::InitialCentroids;
pub use kmeans::{KMeansResult, Termination};
pub use update::MeanMode;
