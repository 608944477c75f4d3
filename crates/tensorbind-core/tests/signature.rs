use tensorbind_core::{
    DType, IOName, ModelSignature, Port, Shape, SpecMismatch, Tensor, TensorSpec,
};

fn port(name: &str, target: &str, spec: TensorSpec) -> Port {
    Port {
        name: IOName::new(name),
        target: target.to_string(),
        spec,
    }
}

#[test]
fn exact_spec_accepts_matching_descriptor() {
    let spec = TensorSpec::exact(DType::F32, &[2, 3]);
    let t = Tensor::zeros(DType::F32, Shape::from_slice(&[2, 3]));
    assert_eq!(spec.matches(&t.desc()), Ok(()));
}

#[test]
fn dynamic_axis_accepts_any_size() {
    let spec = TensorSpec {
        dtype: DType::F32,
        dims: vec![None, Some(4)],
    };

    for batch in [1, 7, 32] {
        let t = Tensor::zeros(DType::F32, Shape::from_slice(&[batch, 4]));
        assert_eq!(spec.matches(&t.desc()), Ok(()));
    }

    let t = Tensor::zeros(DType::F32, Shape::from_slice(&[3, 5]));
    assert_eq!(
        spec.matches(&t.desc()),
        Err(SpecMismatch::Dim {
            axis: 1,
            expected: 4,
            got: 5
        })
    );
}

#[test]
fn dtype_mismatch_is_reported_first() {
    let spec = TensorSpec::exact(DType::F32, &[2]);
    let t = Tensor::zeros(DType::I32, Shape::from_slice(&[3]));
    assert_eq!(
        spec.matches(&t.desc()),
        Err(SpecMismatch::DType {
            expected: DType::F32,
            got: DType::I32
        })
    );
}

#[test]
fn rank_mismatch_is_reported() {
    let spec = TensorSpec::exact(DType::I32, &[2, 3]);
    let t = Tensor::zeros(DType::I32, Shape::from_slice(&[6]));
    assert_eq!(
        spec.matches(&t.desc()),
        Err(SpecMismatch::Rank {
            expected: 2,
            got: 1
        })
    );
}

#[test]
fn transposed_shape_names_the_first_bad_axis() {
    let spec = TensorSpec::exact(DType::F32, &[2, 3]);
    let t = Tensor::zeros(DType::F32, Shape::from_slice(&[3, 2]));
    assert_eq!(
        spec.matches(&t.desc()),
        Err(SpecMismatch::Dim {
            axis: 0,
            expected: 2,
            got: 3
        })
    );
}

#[test]
fn signature_lookup_by_name() {
    let sig = ModelSignature {
        inputs: vec![port("x", "serving/x:0", TensorSpec::exact(DType::F32, &[1]))],
        outputs: vec![port("y", "serving/y:0", TensorSpec::exact(DType::F32, &[1]))],
    };

    assert_eq!(sig.input(&IOName::new("x")).unwrap().target, "serving/x:0");
    assert_eq!(sig.output(&IOName::new("y")).unwrap().target, "serving/y:0");
    assert!(sig.input(&IOName::new("y")).is_none());
}
