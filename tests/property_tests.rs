use kmeans2d::assign::{assign, nearest};
use kmeans2d::kmeans::step;
use kmeans2d::update::update;
use kmeans2d::{Cluster, DataSet, KMeansConfig, MeanMode, Point};
use proptest::prelude::*;

fn points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..40)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

proptest! {
    #[test]
    fn prop_kmeans_all_assigned(pts in points(), k in 1usize..6, seed in any::<u64>()) {
        if k <= pts.len() {
            let ds = DataSet::from_points(&pts).unwrap();
            let res = ds.kmeans(&KMeansConfig::new(k).with_seed(seed)).unwrap();

            prop_assert_eq!(res.labels.len(), pts.len());
            prop_assert_eq!(res.clusters.len(), k);
            let total: usize = res.clusters.iter().map(Cluster::len).sum();
            prop_assert_eq!(total, pts.len());
            for (i, &l) in res.labels.iter().enumerate() {
                prop_assert!(l < k);
                prop_assert!(res.clusters[l].members.contains(&pts[i]));
            }
        }
    }

    #[test]
    fn prop_converged_is_fixed_point(pts in points(), k in 1usize..6, seed in any::<u64>()) {
        if k <= pts.len() {
            let ds = DataSet::from_points(&pts).unwrap();
            let cfg = KMeansConfig::new(k).with_seed(seed);
            let mut res = ds.kmeans(&cfg).unwrap();
            if res.converged() {
                let changed = step(&ds, &mut res.clusters, &mut res.labels, cfg.mean_mode, &cfg.convergence);
                prop_assert!(!changed);
            }
        }
    }

    #[test]
    fn prop_nearest_is_minimal(pts in points(), p in (-100.0f64..100.0, -100.0f64..100.0)) {
        let clusters: Vec<Cluster> = pts.iter().copied().map(Cluster::new).collect();
        let p = Point::new(p.0, p.1);
        let best = nearest(&p, &clusters);
        let d = p.distance(&clusters[best].centroid);
        for (i, c) in clusters.iter().enumerate() {
            let di = p.distance(&c.centroid);
            prop_assert!(d <= di);
            if i < best {
                prop_assert!(d < di);
            }
        }
    }

    #[test]
    fn prop_empty_clusters_keep_centroid(pts in points()) {
        // A far away second centroid never attracts any point.
        let far = Point::new(1e6, 1e6);
        let mut clusters = vec![Cluster::new(Point::new(0.0, 0.0)), Cluster::new(far)];
        let mut labels = Vec::new();
        assign(pts.iter().copied(), &mut clusters, &mut labels);
        update(&mut clusters, MeanMode::Exact);
        prop_assert!(clusters[1].is_empty());
        prop_assert_eq!(clusters[1].centroid, far);
    }
}
