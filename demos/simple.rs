use fast_apsp::DistanceGraph;
use fast_apsp::utils::format_distance;

fn main() {
    let mut graph = DistanceGraph::new(4);

    graph.add_edge(0, 1, 5.0);
    graph.add_edge(0, 2, 3.0);
    graph.add_edge(1, 2, 2.0);
    graph.add_edge(1, 3, 6.0);
    graph.add_edge(2, 3, 7.0);

    println!("Adjacency matrix:");
    print!("{}", graph);

    println!("\nShortest distances between all pairs:");
    print!("{}", graph.shortest_distances());

    let (start, end) = (0, 3);
    let distance = graph.shortest_distance(start, end);
    if distance == fast_apsp::INFINITY {
        println!("\nNo path from {} to {}", start, end);
    } else {
        println!(
            "\nShortest distance from {} to {}: {}",
            start,
            end,
            format_distance(distance)
        );
    }
}
