use std::{cmp::Ordering, collections::BinaryHeap};

use crate::math::{Point3, Spectrum, Vec3};

// Kd-tree layout after Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Primitives_and_Intersection_Acceleration/Kd-Tree_Accelerator

/// A discrete, directional packet of flux deposited on a diffuse surface
/// during the emission pass. Immutable once stored.
#[derive(Copy, Clone, Debug)]
pub struct Photon {
    pub p: Point3,
    /// Direction the photon was traveling when it was deposited.
    pub incident: Vec3,
    pub flux: Spectrum,
}

/// A photon paired with its distance to a query point.
#[derive(Copy, Clone)]
pub struct PhotonHit<'a> {
    pub photon: &'a Photon,
    pub dist: f32,
}

/// Accumulates photons during the emission pass.
///
/// [`PhotonMapBuilder::build`] consumes the builder, so deposits and queries
/// cannot interleave: the write phase ends where the read phase begins.
#[derive(Default)]
pub struct PhotonMapBuilder {
    photons: Vec<Photon>,
}

impl PhotonMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deposits a photon.
    pub fn store(&mut self, photon: Photon) {
        self.photons.push(photon);
    }

    pub fn len(&self) -> usize {
        self.photons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photons.is_empty()
    }

    /// Finalizes the spatial index over the deposited photons.
    pub fn build(self) -> PhotonMap {
        let photons = self.photons;
        let mut nodes = Vec::with_capacity(photons.len());
        let mut indices: Vec<u32> = (0..photons.len() as u32).collect();
        let root = build_node(&photons, &mut indices, &mut nodes);
        PhotonMap {
            photons,
            nodes,
            root,
        }
    }
}

const NO_NODE: i32 = -1;

#[derive(Copy, Clone)]
struct Node {
    photon: u32,
    axis: u8,
    left: i32,
    right: i32,
}

/// Median-split kd-tree node over `indices`, splitting the largest extent
/// axis. Returns the node index or [`NO_NODE`] for an empty slice.
fn build_node(photons: &[Photon], indices: &mut [u32], nodes: &mut Vec<Node>) -> i32 {
    if indices.is_empty() {
        return NO_NODE;
    }

    let mut p_min = Point3::splat(f32::INFINITY);
    let mut p_max = Point3::splat(f32::NEG_INFINITY);
    for &i in indices.iter() {
        p_min = p_min.min(photons[i as usize].p);
        p_max = p_max.max(photons[i as usize].p);
    }
    let extent = p_max - p_min;
    let axis = if extent.x >= extent.y && extent.x >= extent.z {
        0
    } else if extent.y >= extent.z {
        1
    } else {
        2
    };

    let mid = indices.len() / 2;
    indices.select_nth_unstable_by(mid, |&a, &b| {
        photons[a as usize].p[axis].total_cmp(&photons[b as usize].p[axis])
    });
    let photon = indices[mid];

    let (left_half, right_half) = indices.split_at_mut(mid);
    let left = build_node(photons, left_half, nodes);
    let right = build_node(photons, &mut right_half[1..], nodes);

    nodes.push(Node {
        photon,
        axis: axis as u8,
        left,
        right,
    });
    (nodes.len() - 1) as i32
}

/// Candidate ordering for the bounded max-heap used during queries.
struct Candidate {
    dist: f32,
    photon: u32,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.dist.total_cmp(&other.dist) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist.total_cmp(&other.dist)
    }
}

/// The built, read-only photon store.
pub struct PhotonMap {
    photons: Vec<Photon>,
    nodes: Vec<Node>,
    root: i32,
}

impl PhotonMap {
    /// An empty map; every query returns no photons.
    pub fn empty() -> Self {
        PhotonMapBuilder::new().build()
    }

    pub fn len(&self) -> usize {
        self.photons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photons.is_empty()
    }

    /// The up to `k` nearest photons around `p`, ascending by distance.
    pub fn knn(&self, p: Point3, k: usize) -> Vec<PhotonHit> {
        if k == 0 {
            return Vec::new();
        }

        let mut heap = BinaryHeap::with_capacity(k + 1);
        self.search(self.root, p, k, &mut heap);

        heap.into_sorted_vec()
            .into_iter()
            .map(|c| PhotonHit {
                photon: &self.photons[c.photon as usize],
                dist: c.dist,
            })
            .collect()
    }

    fn search(&self, node: i32, p: Point3, k: usize, heap: &mut BinaryHeap<Candidate>) {
        if node == NO_NODE {
            return;
        }
        let node = self.nodes[node as usize];
        let photon = &self.photons[node.photon as usize];

        let dist = (photon.p - p).length();
        heap.push(Candidate {
            dist,
            photon: node.photon,
        });
        if heap.len() > k {
            heap.pop();
        }

        let delta = p[node.axis as usize] - photon.p[node.axis as usize];
        let (near, far) = if delta < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        self.search(near, p, k, heap);
        // The far side can only contribute if the splitting plane is closer
        // than the current k:th candidate.
        let worst = heap.peek().map_or(f32::INFINITY, |c| c.dist);
        if heap.len() < k || delta.abs() < worst {
            self.search(far, p, k, heap);
        }
    }
}
