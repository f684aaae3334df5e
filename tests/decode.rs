use rresp::{
    decode, decode_with, BulkString, DecodeConfig, RespArray, RespError, RespFrame, RespMap,
    RespReader, SimpleString, DEFAULT_MAX_DEPTH,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_decode_reply_scenarios() -> anyhow::Result<()> {
    init_tracing();

    assert_eq!(decode(b"+OK\r\n")?, vec![SimpleString::new("OK").into()]);
    assert_eq!(decode(b":1000\r\n")?, vec![RespFrame::Integer(1000)]);
    assert_eq!(
        decode(b"$6\r\nfoobar\r\n")?,
        vec![BulkString::new("foobar").into()]
    );

    let frames = decode(b"$-1\r\n")?;
    assert_eq!(frames.len(), 1);
    assert!(frames[0].is_null());

    assert_eq!(
        decode(b"*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n")?,
        vec![RespArray::new(vec![
            BulkString::new("foo").into(),
            BulkString::new("bar").into()
        ])
        .into()]
    );
    assert_eq!(
        decode(b"%2\r\n+first\r\n:1\r\n+second\r\n:2\r\n")?,
        vec![RespMap::new(vec![
            (SimpleString::new("first").into(), 1.into()),
            (SimpleString::new("second").into(), 2.into()),
        ])
        .into()]
    );
    Ok(())
}

#[test]
fn test_decode_concatenation() -> anyhow::Result<()> {
    init_tracing();

    let parts: [&[u8]; 6] = [
        b"$5\r\nhello\r\n",
        b"*3\r\n$3\r\nset\r\n$5\r\nhello\r\n$5\r\nworld\r\n",
        b"%1\r\n+foo\r\n,-123456.789\r\n",
        b"-ERR wrong\r\n",
        b"!4\r\nfail\r\n",
        b"$0\r\n\r\n",
    ];
    let mut buf = Vec::new();
    let mut expected = Vec::new();
    for part in parts {
        buf.extend_from_slice(part);
        expected.extend(decode(part)?);
    }
    assert_eq!(expected.len(), parts.len());
    assert_eq!(decode(&buf)?, expected);
    Ok(())
}

#[test]
fn test_decode_failures() {
    init_tracing();

    assert!(matches!(
        decode(b"+OK"),
        Err(RespError::TerminatorNotFound { .. })
    ));
    assert!(matches!(
        decode(b"$10\r\nfoo\r\n"),
        Err(RespError::LengthMismatch { .. })
    ));
    assert!(matches!(
        decode(b"@1\r\n"),
        Err(RespError::UnsupportedType { tag: b'@', .. })
    ));
    assert!(matches!(
        decode(b":12x\r\n"),
        Err(RespError::Parse { .. })
    ));

    // a bad frame after good ones still fails the whole buffer
    assert!(decode(b"+OK\r\n:1\r\n$3\r\nfo").is_err());
}

#[test]
fn test_decode_depth_limit() -> anyhow::Result<()> {
    init_tracing();

    fn nested(depth: usize) -> Vec<u8> {
        let mut buf = b"*1\r\n".repeat(depth);
        buf.extend_from_slice(b":1\r\n");
        buf
    }

    let frames = decode(&nested(DEFAULT_MAX_DEPTH))?;
    let mut frame = &frames[0];
    let mut depth = 0;
    while let RespFrame::Array(array) = frame {
        depth += 1;
        frame = &array[0];
    }
    assert_eq!(depth, DEFAULT_MAX_DEPTH);
    assert_eq!(frame, &RespFrame::Integer(1));

    assert_eq!(
        decode(&nested(DEFAULT_MAX_DEPTH + 1)).unwrap_err(),
        RespError::DepthLimitExceeded(DEFAULT_MAX_DEPTH)
    );

    let config = DecodeConfig::new().with_max_depth(DEFAULT_MAX_DEPTH * 2);
    assert!(decode_with(&nested(DEFAULT_MAX_DEPTH + 1), &config).is_ok());
    Ok(())
}

#[test]
fn test_reader_reports_frame_length() -> anyhow::Result<()> {
    let buf = b"*2\r\n+hello\r\n$5\r\nworld\r\n+foo\r\n";
    let mut reader = RespReader::new(buf, DecodeConfig::default());
    reader.read_frame()?;
    assert_eq!(reader.position(), 23);
    assert_eq!(reader.read_frame()?, SimpleString::new("foo").into());
    assert!(reader.is_exhausted());
    Ok(())
}

#[test]
fn test_decode_from_other_threads() -> anyhow::Result<()> {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let buf = format!(":{}\r\n", i);
                decode(buf.as_bytes())
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let frames = handle.join().expect("decoder thread panicked")?;
        assert_eq!(frames, vec![RespFrame::Integer(i as i64)]);
    }
    Ok(())
}
