use aquamate::{Config, MoistureProbe, MoistureReader, Reading};

struct Constant(u16);

impl MoistureProbe for Constant {
    type Error = ();

    fn sample(&mut self) -> Result<u16, ()> {
        Ok(self.0)
    }
}

fn instant_reader(raw: u16) -> MoistureReader<Constant> {
    let config = Config {
        alpha: 1.0,
        ..Config::default()
    };
    MoistureReader::new(Constant(raw), config).expect("Valid config")
}

#[test]
fn test_fresh_reader_average_is_fault() {
    let reader = MoistureReader::new(Constant(500), Config::default()).unwrap();

    // Empty history averages to 0, below sensor_low
    assert_eq!(reader.running_average(), 0);
    assert_eq!(reader.read_average(), Reading::Fault);
}

#[test]
fn test_average_faults_while_window_fills() {
    let mut reader = instant_reader(500);

    // 500 * k / 10 stays below 200 for k < 4
    for _ in 0..3 {
        reader.read_instant();
        assert_eq!(reader.read_average(), Reading::Fault);
    }

    reader.read_instant();
    assert_eq!(reader.running_average(), 200);
    assert_eq!(reader.read_average(), Reading::Percent(0));
}

#[test]
fn test_full_window_average() {
    let mut reader = instant_reader(525);

    for _ in 0..10 {
        reader.read_instant();
    }

    assert_eq!(reader.running_average(), 525);
    assert_eq!(reader.read_average(), Reading::Percent(50));
}

#[test]
fn test_average_is_pure() {
    let mut reader = instant_reader(700);
    for _ in 0..10 {
        reader.read_instant();
    }

    let first = reader.read_average();
    assert_eq!(reader.read_average(), first);
    assert_eq!(reader.read_average(), first);
    assert_eq!(reader.ema(), 700);
}

#[test]
fn test_default_reader_ramp_recovers() {
    let mut reader = MoistureReader::new(Constant(500), Config::default()).unwrap();

    // EMA history after 9 reads sums to 1729, average 172
    for _ in 0..9 {
        reader.read_instant();
    }
    assert_eq!(reader.running_average(), 172);
    assert_eq!(reader.read_average(), Reading::Fault);

    // 10th read adds 322: sum 2051, average 205
    reader.read_instant();
    assert_eq!(reader.running_average(), 205);
    assert_eq!(reader.read_average(), Reading::Percent(0));
}

#[test]
fn test_average_survives_instant_fault() {
    let mut reader = instant_reader(600);
    for _ in 0..10 {
        reader.read_instant();
    }

    // Probe goes bad: instant reading faults, the stored average still holds
    reader.probe_mut().0 = 1023;
    for _ in 0..4 {
        reader.read_instant();
    }

    assert_eq!(reader.read_instant(), Reading::Fault);
    assert_eq!(reader.running_average(), 600);
    assert_eq!(reader.read_average(), Reading::Percent(61));
}
