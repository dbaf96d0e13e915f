use super::Texture;
use crate::math::Vec2;

pub struct ConstantTexture<T>
where
    T: Copy + Send + Sync,
{
    value: T,
}

impl<T> ConstantTexture<T>
where
    T: Copy + Send + Sync,
{
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> Texture<T> for ConstantTexture<T>
where
    T: Copy + Send + Sync,
{
    fn dimensions(&self) -> Vec2<u32> {
        Vec2 { x: 1, y: 1 }
    }

    fn texel(&self, _pixel: Vec2<u32>) -> T {
        self.value
    }
}
