use artrack::{Frame, MarkerDetection, MarkerTracker, Tracking};

/// Replays a recorded detection dump through the tracker and prints one
/// line per live marker per frame. Dump format: `<ts_ms>:<json array of
/// detections>` per line.
fn main() -> Result<(), artrack::error::Error> {
    use std::io::BufRead;

    env_logger::init();

    let mut args = std::env::args();

    let _ = args.next().unwrap();
    let in_file_name = args.next().expect("expected detections file name");
    let dets_file = std::fs::File::open(in_file_name)?;

    let width = 1280u32;
    let height = 720u32;

    let mut tracker = MarkerTracker::new();

    let reader = std::io::BufReader::new(dets_file).lines();

    for line in reader {
        let line = line?;

        let (ts, markers): (u64, Vec<MarkerDetection>) = if let Some(idx) = line.find(':') {
            let (ts, vector) = line.split_at(idx);

            match (ts.parse::<u64>(), serde_json::from_str(&vector[1..])) {
                (Ok(ts), Ok(vector)) => (ts, vector),
                (Ok(_), _) => {
                    eprintln!("wrong file format: parse json failed");
                    continue;
                }
                (_, Ok(_)) => {
                    eprintln!("wrong file format: parse timestamp failed");
                    continue;
                }
                _ => {
                    eprintln!("wrong file format: parse failed");
                    continue;
                }
            }
        } else {
            eprintln!("wrong file format: expected `:`");
            continue;
        };

        tracker.update(&Frame {
            dims: (width, height),
            markers,
        });

        for m in tracker.markers().iter() {
            let center = (m.vertices[0].coords
                + m.vertices[1].coords
                + m.vertices[2].coords
                + m.vertices[3].coords)
                / 4.0;

            match m.pose {
                Some(pose) => match pose.corrected().model_view() {
                    Ok(mv) => println!(
                        "{} {} {} {} detected t=({:.2} {:.2} {:.2})",
                        ts,
                        m.id,
                        center.x,
                        center.y,
                        mv[(0, 3)],
                        mv[(1, 3)],
                        mv[(2, 3)]
                    ),
                    Err(err) => eprintln!("marker {}: {}", m.id, err),
                },
                None => println!(
                    "{} {} {} {} predicted unseen={}",
                    ts, m.id, center.x, center.y, m.frames_unseen
                ),
            }
        }
    }

    Ok(())
}
