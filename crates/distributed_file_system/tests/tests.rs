use std::collections::BTreeMap;

use locality_dfs::{
    block_location::{BlockLocation, FileStatus},
    dfs::{DistributedFileSystem, LayoutError},
    file_system::{FileSystem, FsError},
    host_info::HostInfo,
    layout::{FsLayout, LoadError},
};

fn hosts(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn make_dfs() -> DistributedFileSystem {
    let host_info = ["host_0", "host_1", "host_2"]
        .into_iter()
        .map(|name| (name.to_string(), HostInfo::with_free_space(1000)))
        .collect::<BTreeMap<_, _>>();
    let mut dfs = DistributedFileSystem::new(host_info, 100);
    dfs.add_file(
        "/input",
        250,
        &[
            hosts(&["host_0", "host_1"]),
            hosts(&["host_2", "host_1"]),
            hosts(&["host_0"]),
        ],
    )
    .unwrap();
    dfs
}

#[test]
fn simple() {
    let dfs = make_dfs();
    let status = dfs.file_status("/input").unwrap();
    assert_eq!(
        status,
        FileStatus {
            path: "/input".to_string(),
            len: 250
        }
    );
    assert_eq!(
        dfs.block_locations(&status, 0, status.len).unwrap(),
        vec![
            BlockLocation::new(0, 100, hosts(&["host_0", "host_1"])),
            BlockLocation::new(100, 100, hosts(&["host_1", "host_2"])),
            BlockLocation::new(200, 50, hosts(&["host_0"])),
        ]
    );
    assert_eq!(dfs.file_chunks("/input"), Some(&vec![0, 1, 2]));
    assert_eq!(
        dfs.hosts_info()
            .values()
            .map(|host| (host.free_space, host.chunks.iter().copied().collect::<Vec<_>>()))
            .collect::<Vec<_>>(),
        vec![(850, vec![0, 2]), (800, vec![0, 1]), (900, vec![1])],
    );
}

#[test]
fn range() {
    let dfs = make_dfs();
    let status = dfs.file_status("/input").unwrap();

    let blocks = dfs.block_locations(&status, 150, 10).unwrap();
    assert_eq!(blocks, vec![BlockLocation::new(100, 100, hosts(&["host_1", "host_2"]))]);

    let blocks = dfs.block_locations(&status, 199, 2).unwrap();
    assert_eq!(blocks.iter().map(|block| block.offset).collect::<Vec<_>>(), vec![100, 200]);

    let blocks = dfs.block_locations(&status, 120, u64::MAX).unwrap();
    assert_eq!(blocks.iter().map(|block| block.end()).collect::<Vec<_>>(), vec![200, 250]);

    assert!(dfs.block_locations(&status, 250, 10).unwrap().is_empty());
    assert!(dfs.block_locations(&status, 0, 0).unwrap().is_empty());
}

#[test]
fn missing_file() {
    let dfs = make_dfs();
    assert!(matches!(
        dfs.file_status("/missing"),
        Err(FsError::NotFound { path }) if path == "/missing"
    ));
    let status = FileStatus {
        path: "/missing".to_string(),
        len: 10,
    };
    assert!(matches!(dfs.block_locations(&status, 0, 10), Err(FsError::NotFound { .. })));
}

#[test]
fn unreachable() {
    let mut dfs = make_dfs();
    let status = dfs.file_status("/input").unwrap();
    dfs.set_reachable(false);
    assert!(matches!(dfs.file_status("/input"), Err(FsError::Unreachable)));
    assert!(matches!(dfs.block_locations(&status, 0, 10), Err(FsError::Unreachable)));
    dfs.set_reachable(true);
    assert_eq!(dfs.block_locations(&status, 0, 10).unwrap().len(), 1);
}

#[test]
fn add_file_errors() {
    let mut dfs = make_dfs();
    assert!(matches!(
        dfs.add_file("/input", 10, &[hosts(&["host_0"])]),
        Err(LayoutError::FileExists { .. })
    ));
    assert!(matches!(
        dfs.add_file("/other", 150, &[hosts(&["host_0"])]),
        Err(LayoutError::ReplicaCountMismatch {
            chunks: 2,
            replicas: 1,
            ..
        })
    ));
    assert!(matches!(
        dfs.add_file("/other", 10, &[hosts(&["host_9"])]),
        Err(LayoutError::UnknownHost { host }) if host == "host_9"
    ));
    assert!(matches!(
        dfs.add_file("/other", 10, &[hosts(&["host_0", "host_0"])]),
        Err(LayoutError::ChunkAlreadyExists { .. })
    ));
    assert!(matches!(
        dfs.add_file("/other", 1000, &vec![hosts(&["host_2"]); 10]),
        Err(LayoutError::NotEnoughSpace {
            free_space: 900,
            need_space: 1000,
            ..
        })
    ));
    assert!(matches!(dfs.file_status("/other"), Err(FsError::NotFound { .. })));
    assert_eq!(dfs.hosts_info()["host_2"].free_space, 900);

    dfs.add_file("/other", 10, &[hosts(&["host_2"])]).unwrap();
    assert_eq!(dfs.file_chunks("/other"), Some(&vec![3]));
    assert_eq!(dfs.hosts_info()["host_2"].free_space, 890);
}

#[test]
fn empty_file() {
    let mut dfs = make_dfs();
    dfs.add_file("/empty", 0, &[]).unwrap();
    let status = dfs.file_status("/empty").unwrap();
    assert_eq!(status.len, 0);
    assert!(dfs.block_locations(&status, 0, status.len).unwrap().is_empty());
}

#[test]
fn copy_and_erase() {
    let mut dfs = make_dfs();
    dfs.copy_chunk(2, "host_2").unwrap();
    assert_eq!(dfs.hosts_info()["host_2"].free_space, 850);
    dfs.erase_chunk_on_host(2, "host_0").unwrap();
    assert_eq!(dfs.hosts_info()["host_0"].free_space, 900);
    assert_eq!(
        dfs.chunk_location(2).map(|hosts| hosts.iter().cloned().collect::<Vec<_>>()),
        Some(hosts(&["host_2"]))
    );

    let status = dfs.file_status("/input").unwrap();
    assert_eq!(
        dfs.block_locations(&status, 200, 50).unwrap(),
        vec![BlockLocation::new(200, 50, hosts(&["host_2"]))]
    );

    assert!(matches!(dfs.copy_chunk(7, "host_0"), Err(LayoutError::NoSuchChunk { chunk_id: 7 })));
    assert!(matches!(
        dfs.copy_chunk(0, "host_1"),
        Err(LayoutError::ChunkAlreadyExists { .. })
    ));
    assert!(matches!(
        dfs.erase_chunk_on_host(1, "host_0"),
        Err(LayoutError::NoSuchChunkOnHost { chunk_id: 1, .. })
    ));
    assert!(matches!(
        dfs.erase_chunk_on_host(1, "host_9"),
        Err(LayoutError::UnknownHost { .. })
    ));
}

#[test]
fn chunk_without_replicas() {
    let mut dfs = make_dfs();
    dfs.erase_chunk_on_host(2, "host_0").unwrap();
    let status = dfs.file_status("/input").unwrap();
    assert_eq!(
        dfs.block_locations(&status, 200, 50).unwrap(),
        vec![BlockLocation::new(200, 50, Vec::new())]
    );
}

#[test]
fn layout_from_yaml() {
    let layout = FsLayout::from_yaml_str(
        r#"
chunk_size: 64
hosts:
  - name: a
    available_space: 1000
  - name: b
    available_space: 1000
files:
  - path: /f
    size: 100
    chunks:
      - [a, b]
      - [b]
  - path: /empty
    size: 0
"#,
    )
    .unwrap();
    let dfs = layout.build().unwrap();
    assert_eq!(dfs.chunk_size(), 64);
    let status = dfs.file_status("/f").unwrap();
    assert_eq!(
        dfs.block_locations(&status, 0, status.len).unwrap(),
        vec![
            BlockLocation::new(0, 64, hosts(&["a", "b"])),
            BlockLocation::new(64, 36, hosts(&["b"])),
        ]
    );
    assert_eq!(dfs.file_status("/empty").unwrap().len, 0);
}

#[test]
fn layout_errors() {
    let layout = FsLayout::from_yaml_str("chunk_size: 0\nhosts: []\n").unwrap();
    assert!(matches!(layout.build(), Err(LayoutError::InvalidChunkSize)));
    assert!(matches!(
        FsLayout::from_yaml_str("hosts: oops"),
        Err(LoadError::Yaml(_))
    ));
    assert!(matches!(
        FsLayout::from_yaml("/nonexistent/layout.yaml"),
        Err(LoadError::Io(_))
    ));
}

#[test]
fn block_end_saturates() {
    assert_eq!(BlockLocation::new(100, 50, Vec::new()).end(), 150);
    assert_eq!(BlockLocation::new(10, u64::MAX, Vec::new()).end(), u64::MAX);
}
