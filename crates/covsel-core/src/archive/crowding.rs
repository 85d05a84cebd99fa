//! Crowding-distance density estimator (NSGA-II style).

use crate::problem::Candidate;

/// Crowding distance per archive member.
///
/// Boundary members of every objective get infinite distance; interior
/// members accumulate the normalized gap between their neighbors. With two
/// or fewer members everything is a boundary.
pub fn crowding_distances(members: &[Candidate]) -> Vec<f64> {
    let n = members.len();
    if n == 0 {
        return Vec::new();
    }
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let num_objectives = members[0].objectives.len();
    let mut distances = vec![0.0f64; n];

    for m in 0..num_objectives {
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&i, &j| members[i].objectives[m].total_cmp(&members[j].objectives[m]));

        let min = members[order[0]].objectives[m];
        let max = members[order[n - 1]].objectives[m];
        distances[order[0]] = f64::INFINITY;
        distances[order[n - 1]] = f64::INFINITY;

        if max - min <= f64::EPSILON {
            continue;
        }
        for k in 1..n - 1 {
            let idx = order[k];
            if distances[idx].is_finite() {
                let gap =
                    members[order[k + 1]].objectives[m] - members[order[k - 1]].objectives[m];
                distances[idx] += gap / (max - min);
            }
        }
    }
    distances
}
