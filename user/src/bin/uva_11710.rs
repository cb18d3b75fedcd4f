// UVa 11710: Expensive Subway
use std::collections::HashMap;
use std::io::{BufRead, BufWriter, Write};

use graph::kruskal;
use io::{scan, AutoSource, Source};

fn solve<R: BufRead, W: Write>(
    mut src: AutoSource<R>,
    out: &mut W,
) -> std::io::Result<()> {
    while !src.is_empty() {
        scan! {
            from &mut src,
            s: usize,
            c: usize,
        }
        if s == 0 && c == 0 {
            break;
        }
        scan! {
            from &mut src,
            stations: [String; s],
            roads: [(String, String, u64); c],
            _start: String,
        }

        let id: HashMap<_, _> = stations.into_iter().zip(0..).collect();
        let edges: Vec<_> =
            roads.iter().map(|(u, v, w)| (id[u], id[v], *w)).collect();
        match kruskal(s, &edges) {
            Some(tree) => {
                let cost: u64 = tree.iter().map(|&i| edges[i].2).sum();
                writeln!(out, "{cost}")?;
            }
            None => writeln!(out, "Impossible")?,
        }
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let mut out = BufWriter::new(std::io::stdout().lock());
    solve(AutoSource::new(std::io::stdin().lock()), &mut out)?;
    out.flush()
}

#[test]
fn sample() {
    let input = "4 5
Lisbon
Porto
Braga
Faro
Lisbon Porto 3
Porto Braga 1
Lisbon Faro 2
Faro Braga 4
Lisbon Braga 5
Lisbon
3 1
A
B
C
A B 1
A
0 0
";
    let mut out = vec![];
    solve(AutoSource::from(input), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "6\nImpossible\n");
}
